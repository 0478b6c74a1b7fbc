//! Queries over a loaded observation sequence.
//!
//! Every function here is pure: the input slice is never modified and
//! filtering returns a new vector.

use chrono::Datelike;

use crate::model::{WeatherCategory, WeatherObservation};

const HOT_THRESHOLD: f64 = 30.0;
const WARM_THRESHOLD: f64 = 20.0;

/// Mean temperature of the observations dated in `month` (1-12).
///
/// Returns `None` when no observation falls in that month, including for
/// month numbers outside 1-12.
pub fn average_temperature_for_month(data: &[WeatherObservation], month: u32) -> Option<f64> {
    let (sum, count) = data
        .iter()
        .filter(|w| w.date().month() == month)
        .fold((0.0, 0usize), |(sum, count), w| (sum + w.temperature(), count + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Observations with a temperature strictly above `threshold`, in input order.
pub fn days_above_temperature(
    data: &[WeatherObservation],
    threshold: f64,
) -> Vec<WeatherObservation> {
    data.iter().filter(|w| w.temperature() > threshold).copied().collect()
}

pub fn count_rainy_days(data: &[WeatherObservation]) -> usize {
    data.iter().filter(|w| w.is_rainy()).count()
}

/// Coarse label for a temperature. NaN falls through to `Cold`.
pub fn weather_category(temperature: f64) -> WeatherCategory {
    if temperature >= HOT_THRESHOLD {
        WeatherCategory::Hot
    } else if temperature >= WARM_THRESHOLD {
        WeatherCategory::Warm
    } else {
        WeatherCategory::Cold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(date: &str, temperature: f64, precipitation: f64) -> WeatherObservation {
        let date: NaiveDate = date.parse().expect("valid test date");
        WeatherObservation::new(date, temperature, 50, precipitation)
    }

    fn sample() -> Vec<WeatherObservation> {
        vec![
            obs("2023-08-01", 32.5, 0.0),
            obs("2023-08-02", 18.0, 5.0),
            obs("2023-01-15", -2.0, 0.0),
        ]
    }

    #[test]
    fn average_for_month_matches_independent_mean() {
        let data = vec![
            obs("2023-03-01", 10.0, 0.0),
            obs("2023-04-01", 99.0, 0.0),
            obs("2024-03-10", 14.0, 0.0),
            obs("2023-03-31", 3.5, 0.0),
        ];
        let expected = (10.0 + 14.0 + 3.5) / 3.0;

        let avg = average_temperature_for_month(&data, 3).expect("march has data");
        assert!((avg - expected).abs() < 1e-9);
    }

    #[test]
    fn average_for_august_in_sample() {
        assert_eq!(average_temperature_for_month(&sample(), 8), Some(25.25));
    }

    #[test]
    fn average_without_matches_is_none() {
        assert_eq!(average_temperature_for_month(&sample(), 5), None);
        assert_eq!(average_temperature_for_month(&[], 8), None);
    }

    #[test]
    fn average_for_out_of_range_month_is_none() {
        assert_eq!(average_temperature_for_month(&sample(), 0), None);
        assert_eq!(average_temperature_for_month(&sample(), 13), None);
    }

    #[test]
    fn days_above_is_strict() {
        let data = vec![obs("2023-08-01", 20.0, 0.0), obs("2023-08-02", 20.0 + 1e-9, 0.0)];

        let above = days_above_temperature(&data, 20.0);
        assert_eq!(above, vec![data[1]]);
    }

    #[test]
    fn days_above_preserves_order() {
        let data = vec![
            obs("2023-08-03", 25.0, 0.0),
            obs("2023-08-01", 10.0, 0.0),
            obs("2023-08-02", 21.0, 0.0),
        ];

        let above = days_above_temperature(&data, 20.0);
        assert_eq!(above, vec![data[0], data[2]]);
    }

    #[test]
    fn days_above_in_sample() {
        let data = sample();
        assert_eq!(days_above_temperature(&data, 20.0), vec![data[0]]);
        assert!(days_above_temperature(&data, 100.0).is_empty());
    }

    #[test]
    fn rainy_day_boundary() {
        let data = vec![obs("2023-08-01", 0.0, 0.0), obs("2023-08-02", 0.0, 0.01)];
        assert_eq!(count_rainy_days(&data), 1);
        assert_eq!(count_rainy_days(&sample()), 1);
        assert_eq!(count_rainy_days(&[]), 0);
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(weather_category(29.999), WeatherCategory::Warm);
        assert_eq!(weather_category(30.0), WeatherCategory::Hot);
        assert_eq!(weather_category(19.999), WeatherCategory::Cold);
        assert_eq!(weather_category(20.0), WeatherCategory::Warm);
        assert_eq!(weather_category(-15.0), WeatherCategory::Cold);
        assert_eq!(weather_category(f64::NAN), WeatherCategory::Cold);
    }

    #[test]
    fn category_for_sample_temperatures() {
        assert_eq!(weather_category(32.5).as_str(), "Hot");
        assert_eq!(weather_category(18.0).as_str(), "Cold");
    }
}
