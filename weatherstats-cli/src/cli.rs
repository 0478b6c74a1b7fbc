use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use std::path::PathBuf;
use weatherstats_core::{
    Config, Session,
    input::{parse_month, parse_threshold},
    weather_category,
};

use crate::{dashboard, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherstats", version, about = "Daily weather data analysis")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a data file and print a short summary.
    Load {
        /// CSV file; falls back to the configured data file.
        file: Option<PathBuf>,
    },

    /// Average temperature for a month.
    Average {
        file: Option<PathBuf>,

        /// Month number (1-12) or name, e.g. "August".
        #[arg(short, long)]
        month: String,
    },

    /// List days with a temperature strictly above a threshold.
    Above {
        file: Option<PathBuf>,

        /// Temperature threshold; falls back to the configured default.
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<String>,

        /// Print rows as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Count days with any precipitation.
    Rainy { file: Option<PathBuf> },

    /// Classify a temperature as Hot, Warm or Cold.
    Category {
        #[arg(allow_hyphen_values = true)]
        temperature: f64,
    },

    /// Interactively edit the configuration file.
    Configure,

    /// Interactive dashboard over one data file.
    Dashboard { file: Option<PathBuf> },
}

impl Command {
    /// Whether the command reads the config file at all.
    fn uses_config(&self) -> bool {
        !matches!(self, Command::Category { .. })
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = if self.command.uses_config() { Config::load()? } else { Config::default() };

        match self.command {
            Command::Load { file } => {
                let session = load_session(&config, file)?;
                println!("Loaded {} observations.", session.observations().len());
                println!("Rainy days: {}", session.rainy_days());
            }
            Command::Average { file, month } => {
                let month = parse_month(&month)?;
                let session = load_session(&config, file)?;
                println!("{}", session.average_report(month).render(config.precision));
            }
            Command::Above { file, threshold, json } => {
                let threshold = match threshold {
                    Some(t) => parse_threshold(&t)?,
                    None => config.default_threshold.ok_or_else(|| {
                        anyhow!(
                            "No threshold given.\n\
                             Hint: pass --threshold or set a default with `weatherstats configure`."
                        )
                    })?,
                };
                let session = load_session(&config, file)?;
                let days = session.days_above(threshold);

                if json {
                    println!("{}", output::json(&days)?);
                } else if days.is_empty() {
                    println!("No days above {threshold}.");
                } else {
                    print!("{}", output::table(&days));
                }
            }
            Command::Rainy { file } => {
                let session = load_session(&config, file)?;
                println!("Rainy days: {}", session.rainy_days());
            }
            Command::Category { temperature } => {
                println!("{}", weather_category(temperature));
            }
            Command::Configure => configure(config)?,
            Command::Dashboard { file } => {
                let path = config.resolve_data_file(file)?;
                dashboard::run(&config, path)?;
            }
        }

        Ok(())
    }
}

fn load_session(config: &Config, file: Option<PathBuf>) -> Result<Session> {
    let path = config.resolve_data_file(file)?;
    let mut session = Session::new();
    session.load(&path)?;
    Ok(session)
}

fn configure(mut config: Config) -> Result<()> {
    let current = config
        .data_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let data_file = Text::new("Default weather data file (empty for none):")
        .with_default(&current)
        .prompt()
        .context("Failed to read data file path")?;
    config.data_file = (!data_file.trim().is_empty()).then(|| PathBuf::from(data_file.trim()));

    config.precision = CustomType::<usize>::new("Decimal places for averages:")
        .with_default(config.precision)
        .with_error_message("Please enter a whole number")
        .prompt()
        .context("Failed to read precision")?;

    let threshold = config.default_threshold.map(|t| t.to_string()).unwrap_or_default();
    let threshold = Text::new("Default temperature threshold (empty for none):")
        .with_default(&threshold)
        .prompt()
        .context("Failed to read threshold")?;
    config.default_threshold = if threshold.trim().is_empty() {
        None
    } else {
        Some(parse_threshold(&threshold)?)
    };

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
