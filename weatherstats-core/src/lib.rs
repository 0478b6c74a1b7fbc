//! Core library for the `weatherstats` CLI.
//!
//! This crate defines:
//! - The daily observation record and its CSV parser
//! - Pure queries over a loaded sequence (monthly average, rainy days, threshold filter, category)
//! - A session that keeps the last successfully loaded file
//! - Configuration handling
//!
//! ```no_run
//! let data = weatherstats_core::parse_csv("weatherdata.csv")?;
//! let august = weatherstats_core::average_temperature_for_month(&data, 8);
//! # Ok::<(), weatherstats_core::ParseError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod session;

pub use analyzer::{
    average_temperature_for_month, count_rainy_days, days_above_temperature, weather_category,
};
pub use config::Config;
pub use error::{FormatError, InputError, ParseError};
pub use model::{ObservationRow, WeatherCategory, WeatherObservation};
pub use parser::parse_csv;
pub use session::{AverageReport, Session};
