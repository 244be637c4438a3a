use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use common::YearRange;
use compute::selection::{SelectionState, DEFAULT_SCOPE, DEFAULT_YEAR_RANGE};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_LOG_FILTER: &str = "scopechart=info,compute=info,common=info";

/// Configuration loaded from defaults, an optional config file and
/// `SCOPECHART_*` environment variables, in increasing priority.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Dataset file (JSON or YAML). The built-in sample is used when unset.
    pub data_path: Option<PathBuf>,
    pub default_scope: String,
    /// Encoded as `"<start>-<end>"`.
    pub default_years: String,
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration
    ///
    /// Without an explicit path, `scopechart.{toml,yaml,json}` in the
    /// working directory is read if present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder()
            .set_default("default_scope", DEFAULT_SCOPE)?
            .set_default("default_years", DEFAULT_YEAR_RANGE.to_string())?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?;

        builder = match config_path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("scopechart").required(false)),
        };

        let config = builder
            .add_source(Environment::with_prefix("SCOPECHART"))
            .build()
            .context("Failed to load configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The selection from configuration, with command-line overrides applied.
    pub fn selection(
        &self,
        scope: Option<String>,
        years: Option<YearRange>,
    ) -> Result<SelectionState> {
        let year_range = match years {
            Some(years) => years,
            None => self
                .default_years
                .parse()
                .with_context(|| format!("Invalid default_years {:?}", self.default_years))?,
        };

        Ok(SelectionState::new(
            scope.unwrap_or_else(|| self.default_scope.clone()),
            year_range,
        ))
    }
}
