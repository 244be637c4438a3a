pub mod scenario_all_years;
pub mod scenario_scope_without_records;
pub mod scenario_two_scopes;

pub use scenario_all_years::ScenarioAllYears;
pub use scenario_scope_without_records::ScenarioScopeWithoutRecords;
pub use scenario_two_scopes::{ScenarioFirstScope, ScenarioSecondScope};

use common::{Dataset, Record, Year};
use rust_decimal::Decimal;

use crate::aggregate::{AggregatedSeries, SeriesAggregator};
use crate::selection::SelectionState;

pub fn dec(value: i64) -> Decimal {
    Decimal::new(value, 0)
}

pub fn years(values: &[i32]) -> Vec<Year> {
    values.iter().copied().map(Year::new).collect()
}

/// Three records over two scopes and two years.
pub fn two_scope_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("S1", 2021, dec(10), dec(5)),
        Record::new("S1", 2022, dec(20), dec(8)),
        Record::new("S2", 2021, dec(7), dec(3)),
    ])
}

/// Scopes 1 to 3, one record per scope and year for 2019 through 2023.
/// Scope 3 has no record in 2021.
pub fn span_dataset() -> Dataset {
    let mut records = Vec::new();
    for (offset, year) in (2019..=2023).enumerate() {
        let offset = offset as i64;
        records.push(Record::new("Scope 1", year, dec(100 + offset * 10), dec(40 + offset)));
        records.push(Record::new("Scope 2", year, dec(60 + offset * 5), dec(20 + offset)));
        if year != 2021 {
            records.push(Record::new(
                "Scope 3",
                year,
                dec(300 - offset * 20),
                Decimal::new(1255 + offset, 1),
            ));
        }
    }
    Dataset::new(records)
}

/// Expected aggregation, one `(year, volume, co2e)` row per axis year.
pub type AssertResult = Vec<(i32, Decimal, Decimal)>;

/// Prepared test scenario.
pub type TestScenario = (Dataset, SelectionState, AssertResult);

/// Trait for building aggregation test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Aggregates the scenario and compares every row against its expectation.
pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) -> AggregatedSeries {
    let (dataset, selection, assert_result) = builder.get_scenario();

    let series = SeriesAggregator::new().aggregate(&dataset, &selection);
    println!("{:#?}", series);

    let rows: AssertResult = series
        .rows()
        .map(|(year, volume, co2e)| (year.get(), volume, co2e))
        .collect();
    assert_eq!(rows, assert_result, "selection {:?}", selection);

    series
}
