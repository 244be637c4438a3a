use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use common::Dataset;
use common::sample::sample_dataset;
use tracing::{debug, info};

/// Loads the dataset from a JSON or YAML file, or returns the built-in
/// sample when no path is given. The format is picked by file extension.
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let Some(path) = path else {
        debug!("No data file configured, using the built-in sample dataset");
        return Ok(sample_dataset());
    };

    info!("Loading dataset from {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let dataset: Dataset = if is_yaml {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML data file {}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON data file {}", path.display()))?
    };

    info!("Loaded {} records", dataset.len());
    Ok(dataset)
}
