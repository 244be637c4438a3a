use anyhow::{Context, Result};
use common::Dataset;
use compute::chart::ChartSpec;
use compute::derive_view;
use compute::options::ControlOptions;
use compute::selection::SelectionState;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::OutputFormat;

/// What the chart and control renderers receive for one selection.
#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub selection: SelectionState,
    pub chart: ChartSpec,
    /// Plotly figure (`data` and `layout`).
    pub plotly: serde_json::Value,
    pub controls: ControlOptions,
}

pub fn render(
    dataset: &Dataset,
    selection: &SelectionState,
    format: OutputFormat,
) -> Result<String> {
    let view = derive_view(dataset, selection);
    if !view.chart.is_drawable() {
        warn!("Dataset is empty, there is no chart to draw");
    }

    let plotly = serde_json::from_str(&view.chart.to_plot().to_json())
        .context("Failed to convert Plotly figure")?;

    let output = RenderOutput {
        selection: selection.clone(),
        chart: view.chart,
        plotly,
        controls: view.controls,
    };

    debug!("Rendering chart output as {:?}", format);
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&output).context("Failed to serialize output as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&output).context("Failed to serialize output as YAML")
        }
    }
}
