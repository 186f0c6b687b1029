mod app;
mod binder;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchBoardApp;
use eframe::egui;
use state::AppState;

/// Fixed input path, read exactly once at startup.
const DATA_PATH: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A missing or malformed file is fatal; the UI never starts.
    let dataset = data::loader::load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("loading launch records from {DATA_PATH}"))?;

    log::info!(
        "Loaded {} launch records from {} sites (payload {} to {} kg)",
        dataset.len(),
        dataset.sites.len(),
        dataset.min_payload,
        dataset.max_payload
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(AppState::new(dataset))))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
