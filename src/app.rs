use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
}

impl LaunchBoardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: proportion chart above, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = ((ui.available_height() - 60.0) / 2.0).max(120.0);

            charts::proportion_chart(ui, &self.state.charts.proportion, half);
            ui.separator();
            charts::scatter_chart(
                ui,
                &self.state.charts.scatter,
                &self.state.booster_colors,
                half,
            );
        });
    }
}
