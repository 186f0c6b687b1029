//! Chart specifications and the two stateless renderers.
//!
//! A renderer turns a derived table plus the current filter context into a
//! declarative description of a chart (kind, title, data bindings). Drawing
//! the description with egui happens in `ui::charts`; nothing here touches
//! the screen, which keeps both renderers trivially testable.

use crate::data::aggregate::ProportionTable;
use crate::data::filter::{FilterState, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Spec types
// ---------------------------------------------------------------------------

/// One slice of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Declarative proportion (pie) chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One scatter point: payload on x, binary outcome on y, coloured by group.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload: f64,
    pub class: f64,
    pub group: String,
}

/// Declarative payload-vs-outcome scatter chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Column whose values pick the point colour.
    pub color_field: String,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Render the proportion table into a pie spec.
///
/// Title templates match the original dashboard verbatim.
pub fn success_pie_spec(table: &ProportionTable, selection: &SiteSelection) -> PieSpec {
    let title = match selection {
        SiteSelection::All => "Total Success Launches By Site".to_string(),
        SiteSelection::Site(site) => {
            format!("Total Success vs. Failed Launches for Site {site}")
        }
    };

    let slices = match table {
        ProportionTable::SuccessBySite(rows) => rows
            .iter()
            .map(|(site, count)| PieSlice {
                label: site.clone(),
                value: f64::from(*count),
            })
            .collect(),
        ProportionTable::OutcomesForSite(rows) => rows
            .iter()
            .map(|(outcome, count)| PieSlice {
                label: outcome.to_string(),
                value: f64::from(*count),
            })
            .collect(),
    };

    PieSpec { title, slices }
}

/// Render the filtered row subset into a scatter spec.
pub fn payload_scatter_spec(
    dataset: &LaunchDataset,
    indices: &[usize],
    filters: &FilterState,
) -> ScatterSpec {
    let (low, high) = filters.payload_range;
    let title = match &filters.selected_site {
        SiteSelection::All => format!(
            "Correlation between Payload and Success for All Sites (Payload: {low} to {high} kg)"
        ),
        SiteSelection::Site(site) => format!(
            "Correlation between Payload and Success for Site {site} (Payload: {low} to {high} kg)"
        ),
    };

    let points = indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            ScatterPoint {
                payload: rec.payload_mass,
                class: f64::from(rec.outcome.as_class()),
                group: rec.booster_category.clone(),
            }
        })
        .collect();

    ScatterSpec {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "class".to_string(),
        color_field: "Booster Version Category".to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::payload_site_indices;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 1000.0, 1, "v1.0"),
            record("A", 4000.0, 0, "FT"),
            record("B", 6000.0, 1, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn pie_title_for_all_sites() {
        let spec = success_pie_spec(
            &ProportionTable::SuccessBySite(vec![("A".to_string(), 1), ("B".to_string(), 1)]),
            &SiteSelection::All,
        );
        assert_eq!(spec.title, "Total Success Launches By Site");
        assert_eq!(spec.slices.len(), 2);
        assert_eq!(spec.slices[0].label, "A");
        assert_eq!(spec.slices[0].value, 1.0);
    }

    #[test]
    fn pie_title_for_one_site() {
        let spec = success_pie_spec(
            &ProportionTable::OutcomesForSite(vec![(Outcome::Success, 2), (Outcome::Failure, 1)]),
            &SiteSelection::Site("CCAFS LC-40".to_string()),
        );
        assert_eq!(
            spec.title,
            "Total Success vs. Failed Launches for Site CCAFS LC-40"
        );
        assert_eq!(spec.slices[0].label, "Success");
        assert_eq!(spec.slices[1].label, "Failure");
    }

    #[test]
    fn empty_table_renders_no_slices() {
        let spec = success_pie_spec(
            &ProportionTable::OutcomesForSite(Vec::new()),
            &SiteSelection::Site("Z".to_string()),
        );
        assert!(spec.slices.is_empty());
    }

    #[test]
    fn scatter_title_embeds_bounds() {
        let ds = dataset();
        let filters = FilterState {
            selected_site: SiteSelection::All,
            payload_range: (0.0, 10000.0),
        };
        let idx = payload_site_indices(&ds, &filters);
        let spec = payload_scatter_spec(&ds, &idx, &filters);
        assert_eq!(
            spec.title,
            "Correlation between Payload and Success for All Sites (Payload: 0 to 10000 kg)"
        );
        assert_eq!(spec.points.len(), 3);
        assert_eq!(spec.x_label, "Payload Mass (kg)");
        assert_eq!(spec.color_field, "Booster Version Category");
    }

    #[test]
    fn scatter_title_for_one_site() {
        let ds = dataset();
        let filters = FilterState {
            selected_site: SiteSelection::Site("B".to_string()),
            payload_range: (5000.0, 7000.0),
        };
        let idx = payload_site_indices(&ds, &filters);
        let spec = payload_scatter_spec(&ds, &idx, &filters);
        assert_eq!(
            spec.title,
            "Correlation between Payload and Success for Site B (Payload: 5000 to 7000 kg)"
        );
        assert_eq!(spec.points.len(), 1);
        assert_eq!(spec.points[0].group, "FT");
        assert_eq!(spec.points[0].class, 1.0);
    }

    #[test]
    fn scatter_tolerates_zero_points() {
        let ds = dataset();
        let filters = FilterState {
            selected_site: SiteSelection::All,
            payload_range: (8000.0, 9000.0),
        };
        let idx = payload_site_indices(&ds, &filters);
        let spec = payload_scatter_spec(&ds, &idx, &filters);
        assert!(spec.points.is_empty());
    }
}
