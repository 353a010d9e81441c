// yearly.rs

//! Builds the yearly mean temperature series, its least-squares trend and the change
//! between the first and last year.

use crate::aggregation::error::AggregationError;
use crate::aggregation::frame::{filtered, float_values, group_mean, int_values};
use crate::dataset::schema::{COL_FTEMP, COL_YEAR};
use crate::dataset::weather_dataset::Dataset;
use crate::types::filter_spec::FilterSpec;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Mean fahrenheit temperature of one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyMean {
    pub year: i32,
    pub mean_temp: f64,
}

/// Ordinary least-squares line `mean_temp ≈ slope · year + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTrend {
    /// Change in °F per year.
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fits a line through `points`.
    ///
    /// Returns `None` with fewer than two distinct years, where the slope is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_dashboard::{LinearTrend, YearlyMean};
    ///
    /// let points = [
    ///     YearlyMean { year: 2000, mean_temp: 50.0 },
    ///     YearlyMean { year: 2010, mean_temp: 51.0 },
    /// ];
    /// let trend = LinearTrend::fit(&points).unwrap();
    /// assert!((trend.slope - 0.1).abs() < 1e-9);
    /// assert!((trend.predict(2005) - 50.5).abs() < 1e-9);
    /// ```
    pub fn fit(points: &[YearlyMean]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| f64::from(p.year)).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.mean_temp).sum::<f64>() / n;

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
            let dx = f64::from(p.year) - mean_x;
            (sxy + dx * (p.mean_temp - mean_y), sxx + dx * dx)
        });
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Value of the trend line at `year`.
    pub fn predict(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }
}

/// Whether the last year of a series was warmer than the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrendDirection {
    Warmer,
    Cooler,
}

impl TrendDirection {
    /// `Warmer` only for a strictly positive change; no change at all counts as `Cooler`.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            TrendDirection::Warmer
        } else {
            TrendDirection::Cooler
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Warmer => "Warmer",
            TrendDirection::Cooler => "Cooler",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Difference between the mean temperature of the last and the first year of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureChange {
    pub from_year: i32,
    pub to_year: i32,
    /// `mean(to_year) - mean(from_year)` in °F.
    pub delta: f64,
    pub direction: TrendDirection,
}

impl TemperatureChange {
    /// Size of the change regardless of its sign.
    pub fn magnitude(&self) -> f64 {
        self.delta.abs()
    }

    /// Metric heading, e.g. `Temperature Change (1950 to 2023)`.
    pub fn heading(&self) -> String {
        format!("Temperature Change ({} to {})", self.from_year, self.to_year)
    }
}

/// Formats the change as the metric value plus its direction, e.g. `1.25°F Warmer`.
impl fmt::Display for TemperatureChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°F {}", self.magnitude(), self.direction)
    }
}

/// Yearly means in ascending year order, with their trend line and overall change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySeries {
    filter: FilterSpec,
    points: Vec<YearlyMean>,
    trend: Option<LinearTrend>,
    change: TemperatureChange,
}

impl YearlySeries {
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Never empty.
    pub fn points(&self) -> &[YearlyMean] {
        &self.points
    }

    /// Least-squares trend, `None` when the series holds a single year.
    pub fn trend(&self) -> Option<&LinearTrend> {
        self.trend.as_ref()
    }

    pub fn change(&self) -> &TemperatureChange {
        &self.change
    }
}

/// Averages the fahrenheit temperature per year over the observations passing `filter`,
/// fits a trend line and computes the change between the first and last year present.
///
/// The first and last year are taken from the filtered series, not from the filter's
/// bounds, since a season or range filter may leave the edge years empty.
///
/// # Errors
///
/// Returns [`AggregationError::NoDataInRange`] if no observation passes `filter`, and
/// [`AggregationError::DataFrameProcessing`] if a Polars operation fails.
pub fn compute_yearly_series(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<YearlySeries, AggregationError> {
    debug!("Computing yearly trend for {}", filter);
    let grouped = group_mean(filtered(dataset, filter), &[COL_YEAR])?;

    let years = int_values(&grouped, COL_YEAR)?;
    let means = float_values(&grouped, COL_FTEMP)?;

    let mut points: Vec<YearlyMean> = years
        .into_iter()
        .zip(means)
        .filter_map(|(year, mean)| {
            Some(YearlyMean {
                year: year?,
                mean_temp: mean?,
            })
        })
        .collect();
    points.sort_by_key(|point| point.year);

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(AggregationError::NoDataInRange { filter: *filter });
    };
    let delta = last.mean_temp - first.mean_temp;
    let change = TemperatureChange {
        from_year: first.year,
        to_year: last.year,
        delta,
        direction: TrendDirection::from_change(delta),
    };

    Ok(YearlySeries {
        filter: *filter,
        trend: LinearTrend::fit(&points),
        points,
        change,
    })
}
