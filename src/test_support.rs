//! Fixtures shared by the unit tests.

use crate::dataset::weather_dataset::Dataset;
use chrono::{Datelike, NaiveDate};
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a temporary `.csv` file that lives as long as the returned handle.
pub fn write_csv(contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One reading per day from `first_year` through `last_year`.
///
/// The kelvin value follows a seasonal cycle plus a small warming trend of
/// 0.05 K per year, so aggregations have something non-trivial to work with.
pub fn daily_readings(first_year: i32, last_year: i32) -> Vec<(NaiveDate, f64)> {
    let start = date(first_year, 1, 1);
    let end = date(last_year, 12, 31);
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| {
            let phase = (day.ordinal() as f64 - 200.0) / 365.25 * std::f64::consts::TAU;
            let trend = (day.year() - first_year) as f64 * 0.05;
            (day, 283.0 + 12.0 * phase.cos() + trend)
        })
        .collect()
}

pub fn daily_dataset(first_year: i32, last_year: i32) -> Dataset {
    Dataset::from_readings(daily_readings(first_year, last_year)).unwrap()
}
