//! Common data types shared between the compute crate, the frontend and the CLI.
//! These describe the emissions records the chart is drawn from and the
//! year values used by the selection controls.

mod dataset;
mod year;

pub mod sample;

pub use dataset::Dataset;
pub use year::{Year, YearParseError, YearRange, YearRangeParseError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single emissions record.
///
/// Records are fixed at load time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Categorical scope label, e.g. "Scope 1".
    pub scope: String,
    pub year: Year,
    pub volume: Decimal,
    /// Carbon-dioxide-equivalent emissions.
    #[serde(rename = "CO2e")]
    pub co2e: Decimal,
}

impl Record {
    pub fn new(
        scope: impl Into<String>,
        year: impl Into<Year>,
        volume: Decimal,
        co2e: Decimal,
    ) -> Self {
        Self {
            scope: scope.into(),
            year: year.into(),
            volume,
            co2e,
        }
    }
}
