use common::YearRange;

use super::{dec, span_dataset, TestScenario, TestScenarioBuilder};
use crate::selection::SelectionState;

/// A scope absent from the dataset: every axis year is present and zero.
pub struct ScenarioScopeWithoutRecords;

impl ScenarioScopeWithoutRecords {
    pub fn new() -> Self {
        Self
    }
}

impl TestScenarioBuilder for ScenarioScopeWithoutRecords {
    fn get_scenario(&self) -> TestScenario {
        (
            span_dataset(),
            SelectionState::new("Scope 4", YearRange::new(2019, 2023)),
            (2019..=2023).map(|year| (year, dec(0), dec(0))).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_and_assert_scenario;

    #[test]
    fn test_scenario_scope_without_records() {
        let series = run_and_assert_scenario(&ScenarioScopeWithoutRecords::new());
        assert_eq!(series.len(), 5);
    }
}
