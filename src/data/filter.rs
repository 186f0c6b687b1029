use std::fmt;

use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Site selection: one named site, or the "all sites" sentinel
// ---------------------------------------------------------------------------

/// The launch-site dropdown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// No site filter applied.
    All,
    /// Restrict to one launch site.
    Site(String),
}

impl SiteSelection {
    /// Whether a record at the given site passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// The two user-controlled filter inputs. Owned by the UI layer; each field
/// is written only by its own widget. The range widget keeps
/// `payload_range.0 <= payload_range.1`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub selected_site: SiteSelection,
    /// Closed interval (low, high) over the payload-mass column, in kg.
    pub payload_range: (f64, f64),
}

impl FilterState {
    /// Initial state: all sites, full payload span of the dataset.
    pub fn new(dataset: &LaunchDataset) -> Self {
        FilterState {
            selected_site: SiteSelection::All,
            payload_range: (dataset.min_payload, dataset.max_payload),
        }
    }
}

// ---------------------------------------------------------------------------
// Row filter for the scatter chart
// ---------------------------------------------------------------------------

/// Return indices of records with `low <= payload <= high` (inclusive both
/// ends), restricted to the selected site unless the selection is `All`.
///
/// An empty result is a normal value; the scatter renderer draws no points.
pub fn payload_site_indices(dataset: &LaunchDataset, filters: &FilterState) -> Vec<usize> {
    let (low, high) = filters.payload_range;
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            rec.payload_mass >= low
                && rec.payload_mass <= high
                && filters.selected_site.matches(&rec.launch_site)
        })
        .map(|(i, _)| i)
        .collect()
}
