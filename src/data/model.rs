use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, stored in the source data as the integer `class` column
/// (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the CSV `class` column. Anything other than 0 or 1 is rejected
    /// by the loader.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class value (1 for success, 0 for failure).
    pub fn as_class(self) -> u32 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch record (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `CCAFS LC-40`.
    pub launch_site: String,
    /// Payload mass in kilograms.
    pub payload_mass: f64,
    /// Binary launch outcome.
    pub outcome: Outcome,
    /// Booster version category, used only for scatter-point colouring.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Step between payload-range tick values (kg).
pub const PAYLOAD_TICK_STEP: f64 = 1000.0;

/// The full parsed dataset with pre-computed column statistics.
///
/// Built once at startup and never mutated afterwards; every aggregation
/// borrows it read-only.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, sorted.
    pub sites: Vec<String>,
    /// Distinct booster version categories, sorted.
    pub booster_categories: BTreeSet<String>,
    /// Minimum of the payload-mass column.
    pub min_payload: f64,
    /// Maximum of the payload-mass column.
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build site/category indices and payload statistics from loaded rows.
    /// Returns `None` when `records` is empty (min/max undefined).
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut site_set: BTreeSet<String> = BTreeSet::new();
        let mut booster_categories: BTreeSet<String> = BTreeSet::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            site_set.insert(rec.launch_site.clone());
            booster_categories.insert(rec.booster_category.clone());
            min_payload = min_payload.min(rec.payload_mass);
            max_payload = max_payload.max(rec.payload_mass);
        }

        Some(LaunchDataset {
            records,
            sites: site_set.into_iter().collect(),
            booster_categories,
            min_payload,
            max_payload,
        })
    }

    /// Tick values for the payload-range control: every `PAYLOAD_TICK_STEP`
    /// from 0 up to `max_payload` rounded up to the next step boundary,
    /// inclusive.
    pub fn payload_ticks(&self) -> Vec<f64> {
        let top = (self.max_payload / PAYLOAD_TICK_STEP).ceil() * PAYLOAD_TICK_STEP;
        (0..)
            .map(|i| i as f64 * PAYLOAD_TICK_STEP)
            .take_while(|&v| v <= top)
            .collect()
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty (never true for a loaded dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn from_records_computes_stats() {
        let ds = LaunchDataset::from_records(vec![
            record("B", 500.0, 1, "FT"),
            record("A", 9600.0, 0, "v1.1"),
            record("A", 2500.0, 1, "FT"),
        ])
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 9600.0);
        assert!(ds.booster_categories.contains("FT"));
        assert!(ds.booster_categories.contains("v1.1"));
    }

    #[test]
    fn from_records_rejects_empty() {
        assert!(LaunchDataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn ticks_round_up_to_next_boundary() {
        let ds = LaunchDataset::from_records(vec![record("A", 9600.0, 1, "FT")]).unwrap();
        let ticks = ds.payload_ticks();
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&10000.0));
        assert_eq!(ticks.len(), 11);
    }

    #[test]
    fn ticks_keep_exact_boundary() {
        let ds = LaunchDataset::from_records(vec![record("A", 9000.0, 1, "FT")]).unwrap();
        assert_eq!(ds.payload_ticks().last(), Some(&9000.0));
    }

    #[test]
    fn outcome_class_round_trip() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.as_class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }
}
