//! Derivation logic for the emissions stacked bar chart: the selection
//! state, the per-year aggregation and the descriptions handed to the
//! chart and control renderers.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod options;
pub mod selection;

#[cfg(test)]
pub mod testing;

use common::Dataset;

use aggregate::SeriesAggregator;
use chart::ChartSpec;
use options::ControlOptions;
use selection::SelectionState;

pub use aggregate::{AggregatedSeries, distinct_scopes, distinct_years};
pub use error::{ComputeError, Result};

/// Everything one render of the chart needs, derived from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub series: AggregatedSeries,
    pub chart: ChartSpec,
    pub controls: ControlOptions,
}

/// Recomputes the series, chart description and control options for a
/// selection. Nothing is cached between calls.
pub fn derive_view(dataset: &Dataset, selection: &SelectionState) -> ChartView {
    let series = SeriesAggregator::new().aggregate(dataset, selection);
    let chart = ChartSpec::build(selection, &series);
    let controls = ControlOptions::from_dataset(dataset);

    ChartView {
        series,
        chart,
        controls,
    }
}
