use compute::chart::ChartSpec;
use yew::prelude::*;

const CHART_DIV_ID: &str = "chart-emissions-stacked";

#[derive(Properties, PartialEq)]
pub struct EmissionsBarChartProps {
    pub chart: ChartSpec,
}

/// Draws the stacked bar chart with Plotly, redrawing whenever the chart
/// description changes.
#[function_component(EmissionsBarChart)]
pub fn emissions_bar_chart(props: &EmissionsBarChartProps) -> Html {
    use_effect_with(props.chart.clone(), |chart| {
        if chart.is_drawable() {
            let plot = chart.to_plot();
            log::trace!("Redrawing chart {:?}", chart.title);
            wasm_bindgen_futures::spawn_local(async move {
                plotly::bindings::react(CHART_DIV_ID, &plot).await;
            });
        }
        || ()
    });

    if !props.chart.is_drawable() {
        return html! {
            <div class="chart-container" style="height: 400px; border: 1px dashed #ccc; display: flex; align-items: center; justify-content: center;">
                <span class="text-gray-500">{"No data to display"}</span>
            </div>
        };
    }

    html! {
        <div id={CHART_DIV_ID} class="chart-container" style="width: 100%; height: 400px;"></div>
    }
}
