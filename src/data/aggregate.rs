use std::collections::BTreeMap;

use super::filter::SiteSelection;
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Proportion-chart aggregation
// ---------------------------------------------------------------------------

/// The derived table behind the proportion chart. Recomputed from scratch on
/// every site change and handed straight to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ProportionTable {
    /// One row per distinct site: (site, number of successful launches).
    /// Sites with zero successes are kept.
    SuccessBySite(Vec<(String, u32)>),
    /// One row per outcome that occurs at the selected site, ordered by
    /// descending count (success first on ties).
    OutcomesForSite(Vec<(Outcome, u32)>),
}

impl ProportionTable {
    pub fn is_empty(&self) -> bool {
        match self {
            ProportionTable::SuccessBySite(rows) => rows.is_empty(),
            ProportionTable::OutcomesForSite(rows) => rows.is_empty(),
        }
    }
}

/// Aggregate the dataset for the proportion chart.
///
/// * `All` → group by site, sum the binary outcome column per group.
/// * One site → count occurrences of each outcome among that site's records.
///   A site with no records yields an empty table rather than an error.
pub fn site_outcome_table(dataset: &LaunchDataset, selection: &SiteSelection) -> ProportionTable {
    match selection {
        SiteSelection::All => {
            let mut successes: BTreeMap<&str, u32> = dataset
                .sites
                .iter()
                .map(|s| (s.as_str(), 0))
                .collect();
            for rec in &dataset.records {
                if rec.outcome.is_success() {
                    if let Some(count) = successes.get_mut(rec.launch_site.as_str()) {
                        *count += 1;
                    }
                }
            }
            ProportionTable::SuccessBySite(
                dataset
                    .sites
                    .iter()
                    .map(|s| (s.clone(), successes[s.as_str()]))
                    .collect(),
            )
        }
        SiteSelection::Site(site) => {
            let mut success = 0u32;
            let mut failure = 0u32;
            for rec in &dataset.records {
                if rec.launch_site == *site {
                    match rec.outcome {
                        Outcome::Success => success += 1,
                        Outcome::Failure => failure += 1,
                    }
                }
            }

            let mut rows = Vec::new();
            if success > 0 {
                rows.push((Outcome::Success, success));
            }
            if failure > 0 {
                rows.push((Outcome::Failure, failure));
            }
            rows.sort_by(|a, b| b.1.cmp(&a.1));
            ProportionTable::OutcomesForSite(rows)
        }
    }
}
