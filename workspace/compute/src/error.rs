use common::{Year, YearRange, YearRangeParseError};
use thiserror::Error;

/// Error types for the compute module.
///
/// Aggregation itself never fails; these are produced only by decoding
/// control values and by the optional strict selection check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A year-range control value could not be decoded.
    #[error("Invalid year range: {0}")]
    InvalidYearRange(#[from] YearRangeParseError),

    /// The selected scope does not occur in the dataset.
    #[error("Unknown scope: {0:?}")]
    UnknownScope(String),

    /// The selected range has its start after its end.
    #[error("Year range {0} starts after it ends")]
    ReversedYearRange(YearRange),

    /// A range bound is not one of the dataset's years.
    #[error("Year {0} does not occur in the dataset")]
    UnknownYear(Year),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
