use common::Dataset;
use compute::options::ControlOptions;

/// Lists the scope choices and year-range choices with their encoded values.
pub fn options(dataset: &Dataset) -> String {
    let controls = ControlOptions::from_dataset(dataset);

    let scopes: String = controls
        .scopes
        .iter()
        .map(|scope| format!("  {}\n", scope))
        .collect();

    let year_ranges: String = controls
        .year_ranges
        .iter()
        .map(|option| format!("\n  {:<12} {}", option.label, option.value()))
        .collect();

    format!("Scopes:\n{}Year ranges:{}", scopes, year_ranges)
}
