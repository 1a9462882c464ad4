//! Synthetic daily weather data, written as CSV.
//!
//! One row per calendar day across a fixed two-year window. The daily
//! high follows a seasonal sine wave with uniform noise on top; the low
//! sits a random 5-15 degrees below the high, so it can never cross it.
//! Precipitation and wind speed ranges depend on the month (wetter in
//! spring/autumn, windier in winter).

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Where the generator writes, and where the interactive no-file branch
/// reads back from.
pub const DEFAULT_OUTPUT: &str = "new_york_weather_data.csv";

pub const DEFAULT_LOCATION: &str = "New York";

pub const CSV_HEADER: [&str; 6] = [
    "Name",
    "Date",
    "Max Temperature (F)",
    "Min Temperature (F)",
    "Precipitation (in)",
    "Wind Speed (mph)",
];

const WINDOW_START: (i32, u32, u32) = (2022, 1, 1);
const WINDOW_END: (i32, u32, u32) = (2023, 12, 31);

#[derive(Debug, Clone)]
pub struct WeatherRow {
    pub location: String,
    pub date: NaiveDate,
    pub max_temp_f: f64,
    pub min_temp_f: f64,
    pub precipitation_in: f64,
    pub wind_speed_mph: u32,
}

/// Generates the dataset and writes it to `path`. Returns the number of
/// rows written.
pub fn generate(path: &Path, location: &str, rng: &mut impl Rng) -> Result<usize> {
    let rows = synthesize(location, rng);
    let file = std::fs::File::create(path)?;
    write_rows(&rows, file)?;

    Ok(rows.len())
}

/// Builds one row per day across the window, in date order.
pub fn synthesize(location: &str, rng: &mut impl Rng) -> Vec<WeatherRow> {
    let start = NaiveDate::from_ymd_opt(WINDOW_START.0, WINDOW_START.1, WINDOW_START.2).unwrap();
    let end = NaiveDate::from_ymd_opt(WINDOW_END.0, WINDOW_END.1, WINDOW_END.2).unwrap();

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let days_since_start = (date - start).num_days();
            let base_temp = seasonal_base(days_since_start);

            let max_temp_f = base_temp + rng.random_range(-5.0..=5.0);
            let min_temp_f = max_temp_f - rng.random_range(5..=15) as f64;

            let precipitation_in = if is_wet_season(date.month()) {
                rng.random_range(0.0..=0.3)
            } else {
                rng.random_range(0.0..=0.1)
            };
            let wind_speed_mph = if is_winter(date.month()) {
                rng.random_range(10..=20)
            } else {
                rng.random_range(5..=15)
            };

            WeatherRow {
                location: location.to_string(),
                date,
                max_temp_f,
                min_temp_f,
                precipitation_in,
                wind_speed_mph,
            }
        })
        .collect()
}

fn write_rows<W: Write>(rows: &[WeatherRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record(&[
            row.location.clone(),
            row.date.format("%Y-%m-%d").to_string(),
            format!("{:.1}", row.max_temp_f),
            format!("{:.1}", row.min_temp_f),
            format!("{:.2}", row.precipitation_in),
            row.wind_speed_mph.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

// Smooth seasonal component of the daily high, in degrees F.
fn seasonal_base(days_since_start: i64) -> f64 {
    let day_of_cycle = (days_since_start % 365) as f64;
    50.0 + 10.0 * (2.0 * std::f64::consts::PI * day_of_cycle / 365.0).sin()
}

fn is_wet_season(month: u32) -> bool {
    matches!(month, 3..=5 | 9..=11)
}

fn is_winter(month: u32) -> bool {
    matches!(month, 12 | 1 | 2)
}

// -- Tests -------------------------------------------------------------------
