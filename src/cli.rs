use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use common::YearRange;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::dataset::load_dataset;

pub mod commands;

use commands::{options, render, summary};

#[derive(Parser)]
#[command(name = "scopechart")]
#[command(
    about = "Stacked emissions chart: inspect the series, chart description and control options"
)]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "SCOPECHART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dataset file (JSON or YAML); overrides `data_path` from configuration
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Scope to chart, e.g. "Scope 1"
    #[arg(short, long, global = true)]
    pub scope: Option<String>,

    /// Year range as "<start>-<end>", e.g. 2021-2023
    #[arg(short, long, global = true)]
    pub years: Option<YearRange>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the chart description, Plotly figure and control options
    Render {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the aggregated volume and CO2e per year
    Summary,
    /// List the scope and year-range options offered by the controls
    Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        init_tracing(&config.log_filter);

        info!("scopechart starting up");
        debug!("Configuration: {:?}", config);

        let data_path = self.data.or_else(|| config.data_path.clone());
        let dataset = load_dataset(data_path.as_deref())?;
        let selection = config.selection(self.scope, self.years)?;

        if let Err(err) = selection.validate(&dataset) {
            warn!(
                "Selection does not match the dataset, the chart will be empty or partial: {}",
                err
            );
        }

        let output = match self.command {
            Commands::Render { format } => render(&dataset, &selection, format)?,
            Commands::Summary => summary(&dataset, &selection),
            Commands::Options => options(&dataset),
        };
        println!("{}", output);

        Ok(())
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
