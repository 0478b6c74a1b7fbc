//! Turning raw user text into query arguments.

use chrono::Month;

use crate::error::InputError;

/// Accepts `1`..=`12` or an English month name / three-letter abbreviation.
pub fn parse_month(value: &str) -> Result<u32, InputError> {
    let trimmed = value.trim();

    if let Ok(n) = trimmed.parse::<u32>() {
        return if (1..=12).contains(&n) {
            Ok(n)
        } else {
            Err(InputError::Month(value.to_string()))
        };
    }

    trimmed
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| InputError::Month(value.to_string()))
}

pub fn parse_threshold(value: &str) -> Result<f64, InputError> {
    match value.trim().parse::<f64>() {
        Ok(t) if !t.is_nan() => Ok(t),
        _ => Err(InputError::Threshold(value.to_string())),
    }
}

/// Full English name for a month number, e.g. `8` -> `"August"`.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()).map(|m| m.name())
}

pub fn month_names() -> impl Iterator<Item = &'static str> {
    (1..=12).filter_map(month_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers_in_range() {
        assert_eq!(parse_month("1"), Ok(1));
        assert_eq!(parse_month(" 12 "), Ok(12));
    }

    #[test]
    fn month_numbers_out_of_range() {
        assert_eq!(parse_month("0"), Err(InputError::Month("0".into())));
        assert!(parse_month("13").is_err());
    }

    #[test]
    fn month_names_any_case() {
        assert_eq!(parse_month("August"), Ok(8));
        assert_eq!(parse_month("JANUARY"), Ok(1));
        assert_eq!(parse_month("dec"), Ok(12));
    }

    #[test]
    fn unknown_month_rejected() {
        assert!(parse_month("Smarch").is_err());
        assert!(parse_month("").is_err());
    }

    #[test]
    fn thresholds() {
        assert_eq!(parse_threshold("30"), Ok(30.0));
        assert_eq!(parse_threshold(" -4.5 "), Ok(-4.5));
        assert_eq!(parse_threshold("hot"), Err(InputError::Threshold("hot".into())));
        assert!(parse_threshold("NaN").is_err());
    }

    #[test]
    fn names_for_numbers() {
        assert_eq!(month_name(8), Some("August"));
        assert_eq!(month_name(13), None);
        assert_eq!(month_names().count(), 12);
    }
}
