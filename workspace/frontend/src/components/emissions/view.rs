use common::{Dataset, YearRange};
use compute::derive_view;
use compute::selection::SelectionState;
use yew::prelude::*;

use super::chart::EmissionsBarChart;
use super::controls::{ScopeSelect, YearRangeSelect};

#[derive(Properties, PartialEq)]
pub struct StackedBarChartProps {
    pub dataset: Dataset,
    #[prop_or_default]
    pub initial: SelectionState,
}

/// Emissions chart with its scope and year-range filters.
///
/// The selection lives only in this component. Series are recomputed on
/// every render from the dataset property.
#[function_component(StackedBarChart)]
pub fn stacked_bar_chart(props: &StackedBarChartProps) -> Html {
    let selection = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let view = derive_view(&props.dataset, &selection);

    let on_scope_change = {
        let selection = selection.clone();
        Callback::from(move |scope: String| {
            log::debug!("Scope selected: {}", scope);
            let mut next = (*selection).clone();
            next.set_scope(scope);
            selection.set(next);
        })
    };

    let on_year_range_change = {
        let selection = selection.clone();
        Callback::from(move |year_range: YearRange| {
            log::debug!("Year range selected: {}", year_range);
            let mut next = (*selection).clone();
            next.set_year_range_pair(year_range);
            selection.set(next);
        })
    };

    html! {
        <div style="display: flex; justify-content: center; align-items: center; height: 100vh; margin: 20px;">
            <div style="width: 90%; max-width: 800px;">
                <h2 class="text-2xl font-bold" style="text-align: center;">{"EdenSeven Task"}</h2>

                <div class="flex flex-row justify-center gap-5 mb-5">
                    <ScopeSelect
                        scopes={view.controls.scopes.clone()}
                        selected={selection.scope.clone()}
                        on_change={on_scope_change}
                    />
                    <YearRangeSelect
                        options={view.controls.year_ranges.clone()}
                        selected={selection.year_range}
                        on_change={on_year_range_change}
                    />
                </div>

                <EmissionsBarChart chart={view.chart} />
            </div>
        </div>
    }
}
