use chrono::NaiveDate;
use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use crate::{
    error::{FormatError, ParseError},
    model::WeatherObservation,
};

const FIELD_COUNT: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `date,temperature,humidity,precipitation` file.
///
/// The first line is a header and is always skipped. Any malformed data row
/// fails the whole call; no partial result is returned.
pub fn parse_csv(path: impl AsRef<Path>) -> Result<Vec<WeatherObservation>, ParseError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;

    let observations = parse_records(file).map_err(|e| match e {
        ParseError::Io { source, .. } => ParseError::Io { path: path.to_path_buf(), source },
        e => e,
    })?;

    debug!(path = %path.display(), rows = observations.len(), "parsed weather data");
    Ok(observations)
}

/// Same as [`parse_csv`], reading from an already-open source.
///
/// I/O failures are reported with an empty path.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<WeatherObservation>, ParseError> {
    parse_records(reader)
}

pub fn parse_str(input: &str) -> Result<Vec<WeatherObservation>, ParseError> {
    parse_records(input.as_bytes())
}

fn parse_records<R: Read>(reader: R) -> Result<Vec<WeatherObservation>, ParseError> {
    // Header content is never checked, so its width must not constrain the rows.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    // Read the header first so the first data row carries its own position.
    reader.byte_headers().map_err(classify)?;

    let mut observations = Vec::new();
    for record in reader.records() {
        let record = record.map_err(classify)?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let observation =
            parse_record(&record).map_err(|kind| ParseError::Format { line, kind })?;
        observations.push(observation);
    }

    Ok(observations)
}

fn classify(err: csv::Error) -> ParseError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    match err.into_kind() {
        ErrorKind::Io(source) => ParseError::Io { path: Default::default(), source },
        ErrorKind::Utf8 { err, .. } => {
            ParseError::Format { line, kind: FormatError::Encoding { source: err } }
        }
        other => ParseError::Format { line, kind: FormatError::Malformed(format!("{other:?}")) },
    }
}

fn parse_record(record: &StringRecord) -> Result<WeatherObservation, FormatError> {
    if record.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount { expected: FIELD_COUNT, found: record.len() });
    }
    let field = |i: usize| record.get(i).unwrap_or_default();
    let (date, temperature, humidity, precipitation) = (field(0), field(1), field(2), field(3));

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|source| FormatError::Date { value: date.to_string(), source })?;
    let temperature = temperature
        .parse::<f64>()
        .map_err(|source| FormatError::Temperature { value: temperature.to_string(), source })?;
    let humidity = humidity
        .parse::<i32>()
        .map_err(|source| FormatError::Humidity { value: humidity.to_string(), source })?;
    let precipitation = precipitation.parse::<f64>().map_err(|source| {
        FormatError::Precipitation { value: precipitation.to_string(), source }
    })?;

    Ok(WeatherObservation::new(date, temperature, humidity, precipitation))
}
