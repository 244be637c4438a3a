use plotly::common::{Marker, Orientation, Title};
use plotly::layout::{Axis, AxisType, BarMode, Legend};
use plotly::{Bar, Layout, Plot};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::warn;

use crate::aggregate::AggregatedSeries;
use crate::selection::SelectionState;

pub const STACK_GROUP: &str = "Stack 0";
pub const CO2E_COLOR: &str = "rgba(153, 102, 255, 0.6)";
pub const VOLUME_COLOR: &str = "rgba(75, 192, 192, 0.6)";

/// One stacked series of the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub stack: String,
}

impl StackedDataset {
    fn new(label: &str, values: &[Decimal], color: &str) -> Self {
        Self {
            label: label.to_string(),
            data: values.iter().map(to_f64).collect(),
            background_color: color.to_string(),
            stack: STACK_GROUP.to_string(),
        }
    }
}

/// Description of the stacked bar chart handed to the rendering library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    /// Category labels, one per axis year.
    pub labels: Vec<String>,
    pub datasets: Vec<StackedDataset>,
    pub stacked_x: bool,
    pub stacked_y: bool,
    pub legend_position: String,
}

impl ChartSpec {
    /// Builds the chart for a selection and its aggregation.
    ///
    /// The CO2e series comes first, then Volume, both in the same stack group.
    pub fn build(selection: &SelectionState, series: &AggregatedSeries) -> Self {
        Self {
            title: format!("Chart for Scope {}", selection.scope),
            labels: series.years.iter().map(ToString::to_string).collect(),
            datasets: vec![
                StackedDataset::new("CO2e", &series.co2e_by_year, CO2E_COLOR),
                StackedDataset::new("Volume", &series.volume_by_year, VOLUME_COLOR),
            ],
            stacked_x: true,
            stacked_y: true,
            legend_position: "top".to_string(),
        }
    }

    /// False when there is no category to draw.
    pub fn is_drawable(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Builds the Plotly figure: one bar trace per dataset, stacked.
    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();

        for dataset in &self.datasets {
            let trace = Bar::new(self.labels.clone(), dataset.data.clone())
                .name(dataset.label.as_str())
                .marker(Marker::new().color(dataset.background_color.clone()));
            plot.add_trace(trace);
        }

        let bar_mode = if self.stacked_x && self.stacked_y {
            BarMode::Stack
        } else {
            BarMode::Group
        };

        let layout = Layout::new()
            .title(Title::with_text(self.title.as_str()))
            .bar_mode(bar_mode)
            .show_legend(true)
            .legend(Legend::new().orientation(Orientation::Horizontal).y(1.1))
            .x_axis(Axis::new().type_(AxisType::Category))
            .height(400);
        plot.set_layout(layout);

        plot
    }
}

fn to_f64(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        warn!("Decimal {} is not representable as f64, plotting 0", value);
        0.0
    })
}
