use chrono::NaiveDate;
use serde::Serialize;

/// One day of measurements, as read from a single data row.
///
/// Fields are private so a value never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherObservation {
    date: NaiveDate,
    temperature: f64,
    humidity: i32,
    precipitation: f64,
}

impl WeatherObservation {
    pub fn new(date: NaiveDate, temperature: f64, humidity: i32, precipitation: f64) -> Self {
        Self { date, temperature, humidity, precipitation }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// A day counts as rainy when any precipitation was recorded.
    pub fn is_rainy(&self) -> bool {
        self.precipitation > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherCategory {
    Hot,
    Warm,
    Cold,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Hot => "Hot",
            WeatherCategory::Warm => "Warm",
            WeatherCategory::Cold => "Cold",
        }
    }

    pub const fn all() -> &'static [WeatherCategory] {
        &[WeatherCategory::Hot, WeatherCategory::Warm, WeatherCategory::Cold]
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flattened view of an observation used for table and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationRow {
    pub date: String,
    pub temperature: f64,
    pub humidity: i32,
    pub precipitation: f64,
    pub category: WeatherCategory,
}

impl From<&WeatherObservation> for ObservationRow {
    fn from(obs: &WeatherObservation) -> Self {
        Self {
            date: obs.date().to_string(),
            temperature: obs.temperature(),
            humidity: obs.humidity(),
            precipitation: obs.precipitation(),
            category: crate::analyzer::weather_category(obs.temperature()),
        }
    }
}
