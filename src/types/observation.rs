//! Defines a single temperature reading and the kelvin to fahrenheit conversion
//! shared by every view.

use chrono::{Datelike, NaiveDate};
use polars::prelude::{lit, Expr};
use serde::Serialize;

/// Offset between the kelvin and celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Ratio between a fahrenheit degree and a celsius degree.
pub const FAHRENHEIT_SCALE: f64 = 9.0 / 5.0;
/// Fahrenheit value of 0 °C.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Converts an absolute temperature in kelvin to degrees fahrenheit.
///
/// Computes `(kelvin - 273.15) * 9/5 + 32`. [`fahrenheit_expr`] performs the exact same
/// sequence of operations inside a Polars query, so a value derived at load time always
/// matches this function bit for bit.
///
/// # Examples
///
/// ```
/// use weather_dashboard::kelvin_to_fahrenheit;
///
/// assert_eq!(kelvin_to_fahrenheit(273.15), 32.0);
/// assert!((kelvin_to_fahrenheit(373.15) - 212.0).abs() < 1e-9);
/// ```
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - KELVIN_OFFSET) * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
}

/// Polars counterpart of [`kelvin_to_fahrenheit`].
pub(crate) fn fahrenheit_expr(kelvin: Expr) -> Expr {
    (kelvin - lit(KELVIN_OFFSET)) * lit(FAHRENHEIT_SCALE) + lit(FAHRENHEIT_OFFSET)
}

/// One date-stamped temperature reading with its derived calendar fields.
///
/// The derived fields are computed once, when the reading enters a
/// [`crate::Dataset`], and are never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Calendar date of the reading.
    pub timestamp: NaiveDate,
    /// Absolute temperature as recorded in the source.
    pub temperature_kelvin: f64,
    /// Calendar year of `timestamp`.
    pub year: i32,
    /// Month of `timestamp`, 1-12.
    pub month: u32,
    /// Day of the year of `timestamp`, 1-366.
    pub day_of_year: u32,
    /// `temperature_kelvin` converted with [`kelvin_to_fahrenheit`].
    pub temperature_fahrenheit: f64,
}

impl Observation {
    /// Builds an observation from a date and a kelvin reading, deriving the calendar
    /// fields and the fahrenheit temperature.
    pub fn new(timestamp: NaiveDate, temperature_kelvin: f64) -> Self {
        Self {
            timestamp,
            temperature_kelvin,
            year: timestamp.year(),
            month: timestamp.month(),
            day_of_year: timestamp.ordinal(),
            temperature_fahrenheit: kelvin_to_fahrenheit(temperature_kelvin),
        }
    }
}
