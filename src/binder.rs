//! Reactive binder: maps filter-input changes to chart recomputations.
//!
//! Each binding declares the filter fields it depends on and a recompute
//! function; `dispatch` synchronously re-runs exactly the bindings whose
//! input set contains the changed field. There are two independent edges:
//!
//! * site selector            → proportion chart
//! * site selector OR payload range → scatter chart

use crate::chart::{self, PieSpec, ScatterSpec};
use crate::data::aggregate::site_outcome_table;
use crate::data::filter::{payload_site_indices, FilterState};
use crate::data::model::LaunchDataset;

/// Identifier of a filter-state field that can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterInput {
    Site,
    PayloadRange,
}

/// The two displayed chart specifications, replaced in place on recompute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Charts {
    pub proportion: PieSpec,
    pub scatter: ScatterSpec,
}

impl Charts {
    /// Render both charts once from the initial filter state.
    pub fn initial(dataset: &LaunchDataset, filters: &FilterState) -> Self {
        let mut charts = Charts::default();
        recompute_proportion(dataset, filters, &mut charts);
        recompute_scatter(dataset, filters, &mut charts);
        charts
    }
}

type Recompute = fn(&LaunchDataset, &FilterState, &mut Charts);

struct Binding {
    inputs: &'static [FilterInput],
    recompute: Recompute,
}

static BINDINGS: &[Binding] = &[
    Binding {
        inputs: &[FilterInput::Site],
        recompute: recompute_proportion,
    },
    Binding {
        inputs: &[FilterInput::Site, FilterInput::PayloadRange],
        recompute: recompute_scatter,
    },
];

fn recompute_proportion(dataset: &LaunchDataset, filters: &FilterState, charts: &mut Charts) {
    let table = site_outcome_table(dataset, &filters.selected_site);
    charts.proportion = chart::success_pie_spec(&table, &filters.selected_site);
}

fn recompute_scatter(dataset: &LaunchDataset, filters: &FilterState, charts: &mut Charts) {
    let indices = payload_site_indices(dataset, filters);
    charts.scatter = chart::payload_scatter_spec(dataset, &indices, filters);
}

/// Re-run every binding that declares `changed` as an input. Each call
/// produces exactly one synchronous recompute per affected chart.
pub fn dispatch(
    changed: FilterInput,
    dataset: &LaunchDataset,
    filters: &FilterState,
    charts: &mut Charts,
) {
    for binding in BINDINGS {
        if binding.inputs.contains(&changed) {
            (binding.recompute)(dataset, filters, charts);
        }
    }
}
