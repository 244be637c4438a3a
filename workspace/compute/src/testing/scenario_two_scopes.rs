use common::YearRange;

use super::{dec, two_scope_dataset, TestScenario, TestScenarioBuilder};
use crate::selection::SelectionState;

/// Scope "S1" over 2021-2022: both years carry data.
pub struct ScenarioFirstScope;

impl ScenarioFirstScope {
    pub fn new() -> Self {
        Self
    }
}

impl TestScenarioBuilder for ScenarioFirstScope {
    fn get_scenario(&self) -> TestScenario {
        (
            two_scope_dataset(),
            SelectionState::new("S1", YearRange::new(2021, 2022)),
            vec![(2021, dec(10), dec(5)), (2022, dec(20), dec(8))],
        )
    }
}

/// Scope "S2" over 2021-2022: 2022 has no record and reads as zero.
pub struct ScenarioSecondScope;

impl ScenarioSecondScope {
    pub fn new() -> Self {
        Self
    }
}

impl TestScenarioBuilder for ScenarioSecondScope {
    fn get_scenario(&self) -> TestScenario {
        (
            two_scope_dataset(),
            SelectionState::new("S2", YearRange::new(2021, 2022)),
            vec![(2021, dec(7), dec(3)), (2022, dec(0), dec(0))],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_and_assert_scenario;

    #[test]
    fn test_scenario_two_scopes() {
        run_and_assert_scenario(&ScenarioFirstScope::new());
    }

    #[test]
    fn test_scenario_second_scope() {
        run_and_assert_scenario(&ScenarioSecondScope::new());
    }
}
