use eframe::egui::{self, Slider, Ui};

use crate::data::filter::SiteSelection;
use crate::data::model::PAYLOAD_TICK_STEP;
use crate::state::AppState;

/// Range-control bounds, fixed regardless of the loaded data. Tick labels
/// come from the dataset, so they can stop short of (or reach past) the
/// slider end when the data's maximum payload diverges from this.
const PAYLOAD_SLIDER_MIN: f64 = 0.0;
const PAYLOAD_SLIDER_MAX: f64 = 10000.0;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: site selector and payload-range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch-site selector ----
    ui.strong("Launch Site");

    // Clone so we can mutate state from inside the combo closure.
    let sites = state.dataset.sites.clone();
    let current = state.filters.selected_site.clone();
    let mut pending: Option<SiteSelection> = None;

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                pending = Some(SiteSelection::All);
            }
            for site in &sites {
                let selection = SiteSelection::Site(site.clone());
                if ui.selectable_label(current == selection, site).clicked() {
                    pending = Some(selection);
                }
            }
        });

    if let Some(selection) = pending {
        state.set_site(selection);
    }

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");

    let (mut low, mut high) = state.filters.payload_range;

    let low_changed = ui
        .add(
            Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_TICK_STEP)
                .text("low"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_TICK_STEP)
                .text("high"),
        )
        .changed();

    // Keep the interval closed: dragging one end past the other drags the
    // other end along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }

    // Tick labels derived from the dataset at load time.
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tick in &state.payload_ticks {
            ui.weak(format!("{tick}"));
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: dashboard title and record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.charts.scatter.points.len()
        ));
    });
}
