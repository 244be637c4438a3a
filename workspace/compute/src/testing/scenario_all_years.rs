use common::YearRange;
use rust_decimal::Decimal;

use super::{dec, span_dataset, TestScenario, TestScenarioBuilder};
use crate::options::ControlOptions;
use crate::selection::SelectionState;

/// Scope 3 with the "All Years" control option applied.
pub struct ScenarioAllYears;

impl ScenarioAllYears {
    pub fn new() -> Self {
        Self
    }
}

impl TestScenarioBuilder for ScenarioAllYears {
    fn get_scenario(&self) -> TestScenario {
        let dataset = span_dataset();
        let options = ControlOptions::from_dataset(&dataset);

        let mut selection = SelectionState::new("Scope 3", YearRange::new(2021, 2021));
        if let Some(all_years) = options.all_years() {
            selection.select_option(all_years);
        }

        (
            dataset,
            selection,
            vec![
                (2019, dec(300), Decimal::new(1255, 1)),
                (2020, dec(280), Decimal::new(1256, 1)),
                (2021, dec(0), dec(0)),
                (2022, dec(240), Decimal::new(1258, 1)),
                (2023, dec(220), Decimal::new(1259, 1)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SeriesAggregator;
    use crate::testing::run_and_assert_scenario;

    #[test]
    fn test_scenario_all_years() {
        run_and_assert_scenario(&ScenarioAllYears::new());
    }

    #[test]
    fn test_all_years_matches_explicit_pair() {
        let via_option = run_and_assert_scenario(&ScenarioAllYears::new());

        let explicit = SelectionState::new("Scope 3", YearRange::new(2019, 2023));
        let via_pair = SeriesAggregator::new().aggregate(&span_dataset(), &explicit);

        assert_eq!(via_option, via_pair);
    }
}
