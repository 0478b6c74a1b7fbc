use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{analyzer, error::ParseError, input, model::WeatherObservation, parser};

/// Data loaded from one file, kept for repeated queries.
///
/// A failed [`Session::load`] leaves previously loaded data in place.
#[derive(Debug, Default)]
pub struct Session {
    path: Option<PathBuf>,
    observations: Vec<WeatherObservation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `path` and replace the current data with its rows.
    ///
    /// Returns the number of observations loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, ParseError> {
        let path = path.as_ref();
        match parser::parse_csv(path) {
            Ok(observations) => {
                info!(path = %path.display(), rows = observations.len(), "loaded weather data");
                self.path = Some(path.to_path_buf());
                self.observations = observations;
                Ok(self.observations.len())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed, keeping previous data");
                Err(e)
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.path.is_some()
    }

    pub fn observations(&self) -> &[WeatherObservation] {
        &self.observations
    }

    pub fn rainy_days(&self) -> usize {
        analyzer::count_rainy_days(&self.observations)
    }

    pub fn days_above(&self, threshold: f64) -> Vec<WeatherObservation> {
        analyzer::days_above_temperature(&self.observations, threshold)
    }

    pub fn average_report(&self, month: u32) -> AverageReport {
        if self.observations.is_empty() {
            return AverageReport::NoData;
        }

        let label = input::month_name(month).map_or_else(|| month.to_string(), str::to_string);
        // A literal NaN temperature poisons the mean; report it like an empty month.
        match analyzer::average_temperature_for_month(&self.observations, month) {
            Some(average) if !average.is_nan() => {
                AverageReport::Average { month: label, average }
            }
            _ => AverageReport::NoDataForMonth { month: label },
        }
    }
}

/// Outcome of an average-temperature request, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum AverageReport {
    NoData,
    NoDataForMonth { month: String },
    Average { month: String, average: f64 },
}

impl AverageReport {
    pub fn average(&self) -> Option<f64> {
        match self {
            AverageReport::Average { average, .. } => Some(*average),
            _ => None,
        }
    }

    /// Render with `precision` decimal places.
    pub fn render(&self, precision: usize) -> String {
        match self {
            AverageReport::NoData => "No weather data available.".to_string(),
            AverageReport::NoDataForMonth { month } => format!("No data available for {month}."),
            AverageReport::Average { month, average } => {
                format!("Average temperature for {month}: {average:.precision$}°C")
            }
        }
    }
}

impl fmt::Display for AverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(2))
    }
}
