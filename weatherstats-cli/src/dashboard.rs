use anyhow::{Context, Result};
use inquire::{Select, Text};
use std::{fmt, path::PathBuf};
use tracing::debug;
use weatherstats_core::{
    Config, Session,
    input::{month_names, parse_month, parse_threshold},
};

use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Average,
    Above,
    Rainy,
    Reload,
    Quit,
}

impl Action {
    const fn all() -> &'static [Action] {
        &[Action::Average, Action::Above, Action::Rainy, Action::Reload, Action::Quit]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Average => "Calculate average temperature",
            Action::Above => "Find days above threshold",
            Action::Rainy => "Count rainy days",
            Action::Reload => "Load another file",
            Action::Quit => "Quit",
        })
    }
}

/// Menu loop over a single session. Load failures are reported and the
/// previously loaded data stays available.
pub fn run(config: &Config, path: PathBuf) -> Result<()> {
    let mut session = Session::new();
    load(&mut session, path);

    loop {
        let action = Select::new("What next?", Action::all().to_vec())
            .prompt()
            .context("Failed to read menu selection")?;
        debug!(?action, "dashboard action");

        match action {
            Action::Average => {
                let names: Vec<&str> = month_names().collect();
                let month = Select::new("Month:", names).prompt().context("Failed to read month")?;
                match parse_month(month) {
                    Ok(m) => println!("{}", session.average_report(m).render(config.precision)),
                    Err(e) => println!("{e}"),
                }
            }
            Action::Above => {
                let default = config.default_threshold.map(|t| t.to_string());
                let mut prompt = Text::new("Temperature threshold:");
                if let Some(default) = default.as_deref() {
                    prompt = prompt.with_default(default);
                }
                let text = prompt.prompt().context("Failed to read threshold")?;

                let threshold = match parse_threshold(&text) {
                    Ok(t) => t,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                if session.observations().is_empty() {
                    println!("No weather data available.");
                    continue;
                }

                let days = session.days_above(threshold);
                if days.is_empty() {
                    println!("No days above {threshold}.");
                } else {
                    print!("{}", output::table(&days));
                }
            }
            Action::Rainy => println!("{}", rainy_message(&session)),
            Action::Reload => {
                let path = Text::new("Weather data file:")
                    .prompt()
                    .context("Failed to read file path")?;
                load(&mut session, PathBuf::from(path.trim()));
            }
            Action::Quit => return Ok(()),
        }
    }
}

fn rainy_message(session: &Session) -> String {
    if session.is_loaded() {
        format!("Rainy days: {}", session.rainy_days())
    } else {
        "No weather data available.".to_string()
    }
}

fn load(session: &mut Session, path: PathBuf) {
    match session.load(&path) {
        Ok(n) => {
            println!("Loaded {n} observations from {}", path.display());
            println!("Rainy days: {}", session.rainy_days());
        }
        Err(e) => {
            let e = anyhow::Error::from(e);
            println!("Error reading weather data file: {e:#}");
            if let Some(current) = session.path() {
                println!("Still using {}", current.display());
            }
        }
    }
}
