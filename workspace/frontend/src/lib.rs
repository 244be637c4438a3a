use common::sample::sample_dataset;
use yew::prelude::*;

mod components;
pub mod settings;

use components::emissions::StackedBarChart;

#[function_component(App)]
pub fn app() -> Html {
    // The dataset is built once and handed down read-only.
    let dataset = use_state(sample_dataset);
    let initial = settings::get_settings().initial_selection();
    log::trace!("Rendering app with {} records", dataset.len());

    html! {
        <StackedBarChart dataset={(*dataset).clone()} initial={initial} />
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Emissions Chart Starting ===");
    log::info!("Application settings: {:?}", settings);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
