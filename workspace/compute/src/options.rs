use common::{Dataset, YearRange};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{distinct_scopes, distinct_years};
use crate::error::Result;

pub const ALL_YEARS_LABEL: &str = "All Years";

/// One entry of the year-range select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRangeOption {
    pub range: YearRange,
    pub label: String,
    /// Marks the synthetic option spanning every dataset year.
    pub all_years: bool,
}

impl YearRangeOption {
    fn explicit(range: YearRange) -> Self {
        Self {
            label: format!("{} - {}", range.start, range.end),
            range,
            all_years: false,
        }
    }

    fn all_years(range: YearRange) -> Self {
        Self {
            label: ALL_YEARS_LABEL.to_string(),
            range,
            all_years: true,
        }
    }

    /// The control value, `"<start>-<end>"`.
    pub fn value(&self) -> String {
        self.range.to_string()
    }
}

/// Everything the selection controls need to render.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ControlOptions {
    pub scopes: Vec<String>,
    pub year_ranges: Vec<YearRangeOption>,
}

impl ControlOptions {
    /// Builds the scope list and every ascending year pair of the dataset,
    /// followed by the "All Years" option. An empty dataset has no year
    /// options at all.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let scopes = distinct_scopes(dataset);
        let years = distinct_years(dataset);

        let mut year_ranges: Vec<YearRangeOption> = years
            .iter()
            .enumerate()
            .flat_map(|(index, start)| {
                years[index + 1..]
                    .iter()
                    .map(move |end| YearRangeOption::explicit(YearRange::new(*start, *end)))
            })
            .collect();

        if let (Some(first), Some(last)) = (years.first(), years.last()) {
            year_ranges.push(YearRangeOption::all_years(YearRange::new(*first, *last)));
        }

        debug!(
            "Built control options: {} scopes, {} year ranges",
            scopes.len(),
            year_ranges.len()
        );

        Self {
            scopes,
            year_ranges,
        }
    }

    pub fn all_years(&self) -> Option<&YearRangeOption> {
        self.year_ranges.iter().find(|option| option.all_years)
    }
}

/// Decodes a year-range control value into its pair.
pub fn decode_year_range(value: &str) -> Result<YearRange> {
    Ok(value.parse::<YearRange>()?)
}
