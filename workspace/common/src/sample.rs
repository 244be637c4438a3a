//! Built-in emissions dataset.
//!
//! Used by the frontend as its fixed data source and by the CLI when no
//! data file is configured.

use rust_decimal::Decimal;

use crate::{Dataset, Record};

fn record(scope: &str, year: i32, volume: i64, co2e: i64, co2e_scale: u32) -> Record {
    Record::new(scope, year, Decimal::new(volume, 0), Decimal::new(co2e, co2e_scale))
}

/// Returns the sample dataset: three scopes, two records per scope and year,
/// covering 2019 through 2023.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        record("Scope 1", 2019, 131, 766, 1),
        record("Scope 1", 2019, 140, 693, 1),
        record("Scope 1", 2020, 99, 541, 1),
        record("Scope 1", 2020, 102, 418, 1),
        record("Scope 1", 2021, 97, 556, 1),
        record("Scope 1", 2021, 117, 364, 1),
        record("Scope 1", 2022, 145, 617, 1),
        record("Scope 1", 2022, 120, 393, 1),
        record("Scope 1", 2023, 144, 458, 1),
        record("Scope 1", 2023, 162, 546, 1),
        record("Scope 2", 2019, 78, 382, 1),
        record("Scope 2", 2019, 124, 725, 1),
        record("Scope 2", 2020, 123, 585, 1),
        record("Scope 2", 2020, 56, 332, 1),
        record("Scope 2", 2021, 55, 257, 1),
        record("Scope 2", 2021, 67, 259, 1),
        record("Scope 2", 2022, 68, 314, 1),
        record("Scope 2", 2022, 123, 483, 1),
        record("Scope 2", 2023, 137, 485, 1),
        record("Scope 2", 2023, 124, 584, 1),
        record("Scope 3", 2019, 254, 1046, 1),
        record("Scope 3", 2019, 300, 1541, 1),
        record("Scope 3", 2020, 302, 960, 1),
        record("Scope 3", 2020, 256, 1149, 1),
        record("Scope 3", 2021, 298, 1276, 1),
        record("Scope 3", 2021, 270, 1187, 1),
        record("Scope 3", 2022, 288, 1176, 1),
        record("Scope 3", 2022, 261, 1405, 1),
        record("Scope 3", 2023, 319, 1703, 1),
        record("Scope 3", 2023, 240, 1134, 1),
    ])
}
