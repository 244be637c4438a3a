use std::collections::{BTreeMap, BTreeSet};

use common::{Dataset, Year};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use crate::selection::SelectionState;

/// Returns the distinct years of the whole dataset, ascending.
pub fn distinct_years(dataset: &Dataset) -> Vec<Year> {
    dataset
        .iter()
        .map(|record| record.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns the distinct scopes of the whole dataset, sorted lexically.
pub fn distinct_scopes(dataset: &Dataset) -> Vec<String> {
    dataset
        .iter()
        .map(|record| record.scope.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Chart series derived from a dataset and a selection.
///
/// The three vectors are aligned and always have the same length. `years`
/// is the category axis of the full dataset and does not shrink when the
/// selection filters records out.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AggregatedSeries {
    pub years: Vec<Year>,
    pub volume_by_year: Vec<Decimal>,
    pub co2e_by_year: Vec<Decimal>,
}

impl AggregatedSeries {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Sum of the volume series, saturating at `Decimal::MAX`.
    pub fn total_volume(&self) -> Decimal {
        saturating_sum(&self.volume_by_year, "volume total")
    }

    /// Sum of the CO2e series, saturating at `Decimal::MAX`.
    pub fn total_co2e(&self) -> Decimal {
        saturating_sum(&self.co2e_by_year, "CO2e total")
    }

    /// Iterates `(year, volume, co2e)` rows in axis order.
    pub fn rows(&self) -> impl Iterator<Item = (Year, Decimal, Decimal)> + '_ {
        self.years
            .iter()
            .zip(&self.volume_by_year)
            .zip(&self.co2e_by_year)
            .map(|((year, volume), co2e)| (*year, *volume, *co2e))
    }
}

/// Adds two quantities, clamping to the representable range instead of
/// panicking on overflow.
fn saturating_add(total: Decimal, value: Decimal, what: &str) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        warn!("Overflow while summing {}, clamping to the decimal range", what);
        if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

fn saturating_sum(values: &[Decimal], what: &str) -> Decimal {
    values
        .iter()
        .fold(Decimal::ZERO, |total, value| saturating_add(total, *value, what))
}

/// Sums volume and CO2e per year for the records matching a selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeriesAggregator;

impl SeriesAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregates the dataset for the given selection.
    ///
    /// # Arguments
    ///
    /// * `dataset` - Records to aggregate; only read
    /// * `selection` - Scope and inclusive year range used to filter records
    ///
    /// # Returns
    ///
    /// One entry per distinct dataset year. Years with no matching record,
    /// including every year outside the selected range, sum to zero.
    #[instrument(
        skip(self, dataset),
        fields(num_records = dataset.len(), scope = %selection.scope, years = %selection.year_range)
    )]
    pub fn aggregate(&self, dataset: &Dataset, selection: &SelectionState) -> AggregatedSeries {
        let years = distinct_years(dataset);

        let mut sums: BTreeMap<Year, (Decimal, Decimal)> = years
            .iter()
            .map(|year| (*year, (Decimal::ZERO, Decimal::ZERO)))
            .collect();

        let mut matched = 0usize;
        for record in dataset
            .iter()
            .filter(|r| r.scope == selection.scope && selection.year_range.contains(r.year))
        {
            trace!(
                year = %record.year,
                volume = %record.volume,
                co2e = %record.co2e,
                "Adding record"
            );
            if let Some((volume, co2e)) = sums.get_mut(&record.year) {
                *volume = saturating_add(*volume, record.volume, "volume");
                *co2e = saturating_add(*co2e, record.co2e, "CO2e");
            }
            matched += 1;
        }

        debug!(
            "Aggregated {} matching records over {} years",
            matched,
            years.len()
        );

        let (volume_by_year, co2e_by_year) = sums.into_values().unzip();

        AggregatedSeries {
            years,
            volume_by_year,
            co2e_by_year,
        }
    }
}
