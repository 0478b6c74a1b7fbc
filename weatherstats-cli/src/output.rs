use anyhow::{Context, Result};
use weatherstats_core::{ObservationRow, WeatherObservation};

const HEADERS: [&str; 5] =
    ["Date", "Temperature (°C)", "Humidity (%)", "Precipitation", "Category"];

/// Render observations as a fixed-width table.
pub fn table(observations: &[WeatherObservation]) -> String {
    let rows: Vec<[String; 5]> = observations
        .iter()
        .map(ObservationRow::from)
        .map(|r| {
            [
                r.date,
                format!("{:.1}", r.temperature),
                r.humidity.to_string(),
                format!("{:.1}", r.precipitation),
                r.category.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let separator = widths.map(|w| "-".repeat(w));
    push_line(&mut out, &HEADERS, &widths);
    push_line(&mut out, &separator, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .map(|c| c.as_ref())
        .zip(widths)
        .map(|(cell, w): (&str, &usize)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

pub fn json(observations: &[WeatherObservation]) -> Result<String> {
    let rows: Vec<ObservationRow> = observations.iter().map(ObservationRow::from).collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize observations to JSON")
}
