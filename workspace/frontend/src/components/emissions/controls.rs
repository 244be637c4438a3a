use common::YearRange;
use compute::options::{decode_year_range, YearRangeOption};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScopeSelectProps {
    pub scopes: Vec<String>,
    pub selected: String,
    pub on_change: Callback<String>,
}

#[function_component(ScopeSelect)]
pub fn scope_select(props: &ScopeSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_change.emit(target.value());
            }
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{"Select Scope: "}</span>
            </label>
            <select class="select select-bordered select-sm" {onchange}>
                { for props.scopes.iter().map(|scope| html! {
                    <option key={scope.clone()} value={scope.clone()} selected={*scope == props.selected}>
                        {scope}
                    </option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct YearRangeSelectProps {
    pub options: Vec<YearRangeOption>,
    pub selected: YearRange,
    pub on_change: Callback<YearRange>,
}

#[function_component(YearRangeSelect)]
pub fn year_range_select(props: &YearRangeSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                match decode_year_range(&value) {
                    Ok(year_range) => on_change.emit(year_range),
                    Err(err) => log::warn!("Ignoring year range {:?}: {}", value, err),
                }
            }
        })
    };

    // "All Years" shares its value with an explicit pair; only the first
    // matching option is marked selected.
    let selected_index = props
        .options
        .iter()
        .position(|option| option.range == props.selected);

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{"Select Year Range: "}</span>
            </label>
            <select class="select select-bordered select-sm" {onchange}>
                { for props.options.iter().enumerate().map(|(index, option)| html! {
                    <option
                        key={format!("{}-{}", option.value(), option.all_years)}
                        value={option.value()}
                        selected={selected_index == Some(index)}
                    >
                        {&option.label}
                    </option>
                }) }
            </select>
        </div>
    }
}
