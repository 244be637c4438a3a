use common::Dataset;
use compute::aggregate::SeriesAggregator;
use compute::selection::SelectionState;

fn row(label: &str, volume: &str, co2e: &str) -> String {
    format!("{:<8}{:>14}{:>14}", label, volume, co2e)
}

/// Formats the aggregated series as a table, one row per axis year.
pub fn summary(dataset: &Dataset, selection: &SelectionState) -> String {
    let series = SeriesAggregator::new().aggregate(dataset, selection);
    let title = format!("Chart for Scope {} ({})", selection.scope, selection.year_range);

    if series.is_empty() {
        return format!("{}\nNo data to display", title);
    }

    let header = row("Year", "Volume", "CO2e");
    let rows = series.rows().map(|(year, volume, co2e)| {
        row(&year.to_string(), &volume.to_string(), &co2e.to_string())
    });
    let total = row(
        "Total",
        &series.total_volume().to_string(),
        &series.total_co2e().to_string(),
    );

    std::iter::once(title)
        .chain(std::iter::once(header))
        .chain(rows)
        .chain(std::iter::once(total))
        .collect::<Vec<_>>()
        .join("\n")
}
