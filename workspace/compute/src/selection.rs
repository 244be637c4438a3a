use common::{Dataset, Year, YearRange};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{distinct_scopes, distinct_years};
use crate::error::{ComputeError, Result};
use crate::options::YearRangeOption;

pub const DEFAULT_SCOPE: &str = "Scope 1";
pub const DEFAULT_YEAR_RANGE: YearRange = YearRange {
    start: Year::new(2021),
    end: Year::new(2023),
};

/// The user's current chart filters.
///
/// Mutators replace values as given and never fail. A scope or range that
/// matches nothing produces a zero-filled aggregation rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub scope: String,
    pub year_range: YearRange,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            scope: DEFAULT_SCOPE.to_string(),
            year_range: DEFAULT_YEAR_RANGE,
        }
    }
}

impl SelectionState {
    pub fn new(scope: impl Into<String>, year_range: YearRange) -> Self {
        Self {
            scope: scope.into(),
            year_range,
        }
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
        debug!("Scope set to {:?}", self.scope);
    }

    /// Replaces the year range. Bounds are stored as given, even reversed.
    pub fn set_year_range(&mut self, start: impl Into<Year>, end: impl Into<Year>) {
        self.set_year_range_pair(YearRange::new(start, end));
    }

    pub fn set_year_range_pair(&mut self, year_range: YearRange) {
        self.year_range = year_range;
        debug!("Year range set to {}", self.year_range);
    }

    /// Applies a year-range control option. The "All Years" option is not
    /// treated differently from its explicit pair.
    pub fn select_option(&mut self, option: &YearRangeOption) {
        self.set_year_range_pair(option.range);
    }

    /// Strict check of the selection against a dataset.
    ///
    /// Never called by the mutators; callers that want to surface bad
    /// selections can use it to report them.
    pub fn validate(&self, dataset: &Dataset) -> Result<()> {
        if !distinct_scopes(dataset).contains(&self.scope) {
            return Err(ComputeError::UnknownScope(self.scope.clone()));
        }

        if self.year_range.is_reversed() {
            return Err(ComputeError::ReversedYearRange(self.year_range));
        }

        let years = distinct_years(dataset);
        for bound in [self.year_range.start, self.year_range.end] {
            if years.binary_search(&bound).is_err() {
                return Err(ComputeError::UnknownYear(bound));
            }
        }

        Ok(())
    }
}
