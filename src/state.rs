use crate::binder::{self, Charts, FilterInput};
use crate::color::ColorMap;
use crate::data::filter::{FilterState, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the app starts and never mutated;
/// `filters` is written only through the setters below, which route the
/// change through the reactive binder.
pub struct AppState {
    /// Loaded dataset (read-only for the process lifetime).
    pub dataset: LaunchDataset,

    /// Current site selection and payload range.
    pub filters: FilterState,

    /// Displayed chart specifications, replaced on each filter change.
    pub charts: Charts,

    /// Booster-version-category colours for the scatter chart.
    pub booster_colors: ColorMap,

    /// Tick values for the payload-range control (derived once at load).
    pub payload_ticks: Vec<f64>,
}

impl AppState {
    /// Build the initial state: all sites selected, payload range spanning
    /// the dataset, both charts rendered once.
    pub fn new(dataset: LaunchDataset) -> Self {
        let filters = FilterState::new(&dataset);
        let charts = Charts::initial(&dataset, &filters);
        let booster_colors = ColorMap::new(&dataset.booster_categories);
        let payload_ticks = dataset.payload_ticks();

        AppState {
            dataset,
            filters,
            charts,
            booster_colors,
            payload_ticks,
        }
    }

    /// Change the site selection and re-render the affected charts.
    pub fn set_site(&mut self, selection: SiteSelection) {
        if self.filters.selected_site == selection {
            return;
        }
        self.filters.selected_site = selection;
        binder::dispatch(
            FilterInput::Site,
            &self.dataset,
            &self.filters,
            &mut self.charts,
        );
    }

    /// Change the payload range and re-render the scatter chart. Callers
    /// (the range widgets) guarantee `low <= high`.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        if self.filters.payload_range == (low, high) {
            return;
        }
        self.filters.payload_range = (low, high);
        binder::dispatch(
            FilterInput::PayloadRange,
            &self.dataset,
            &self.filters,
            &mut self.charts,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: "FT".to_string(),
        }
    }

    fn state() -> AppState {
        AppState::new(
            LaunchDataset::from_records(vec![
                record("A", 1000.0, 1),
                record("B", 4000.0, 0),
                record("B", 8000.0, 1),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn defaults_span_the_dataset() {
        let st = state();
        assert_eq!(st.filters.selected_site, SiteSelection::All);
        assert_eq!(st.filters.payload_range, (1000.0, 8000.0));
        assert_eq!(st.charts.scatter.points.len(), 3);
    }

    #[test]
    fn set_site_updates_charts() {
        let mut st = state();
        st.set_site(SiteSelection::Site("B".to_string()));
        assert_eq!(
            st.charts.proportion.title,
            "Total Success vs. Failed Launches for Site B"
        );
        assert_eq!(st.charts.scatter.points.len(), 2);
    }

    #[test]
    fn set_payload_range_narrows_scatter() {
        let mut st = state();
        st.set_payload_range(3000.0, 5000.0);
        assert_eq!(st.charts.scatter.points.len(), 1);
        assert_eq!(st.charts.scatter.points[0].payload, 4000.0);
    }

    #[test]
    fn unchanged_inputs_do_not_rerender() {
        let mut st = state();
        let before = st.charts.clone();
        st.set_site(SiteSelection::All);
        st.set_payload_range(1000.0, 8000.0);
        assert_eq!(st.charts, before);
    }
}
