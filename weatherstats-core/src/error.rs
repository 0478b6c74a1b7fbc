use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a file into observations.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read weather data file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed weather data on line {line}")]
    Format {
        line: usize,
        #[source]
        kind: FormatError,
    },
}

impl ParseError {
    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Io { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, ParseError::Format { .. })
    }

    /// 1-based line number of the offending row, for format failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Format { line, .. } => Some(*line),
            ParseError::Io { .. } => None,
        }
    }
}

/// Why a single data row was rejected.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid date '{value}'")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid temperature '{value}'")]
    Temperature {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid humidity '{value}'")]
    Humidity {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("row is not valid UTF-8")]
    Encoding {
        #[source]
        source: csv::Utf8Error,
    },

    #[error("unreadable record: {0}")]
    Malformed(String),

    #[error("invalid precipitation '{value}'")]
    Precipitation {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Rejected user input, caught before any query runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid month '{0}'. Use a number 1-12 or a month name such as 'August'.")]
    Month(String),

    #[error("Invalid threshold value '{0}'. Please enter a valid number.")]
    Threshold(String),
}
