// heatmap.rs

//! Builds the year × day-of-year mean temperature grid shown as a heatmap.

use crate::aggregation::error::AggregationError;
use crate::aggregation::frame::{filtered, first_float, float_values, group_mean, int_values};
use crate::dataset::schema::{COL_DAY_OF_YEAR, COL_FTEMP, COL_YEAR};
use crate::dataset::weather_dataset::Dataset;
use crate::types::calendar::{DAYS_IN_LEAP_YEAR, MONTH_LABELS, MONTH_START_DAYS};
use crate::types::filter_spec::FilterSpec;
use log::debug;
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const COL_MEAN: &str = "mean";
const COL_MAX: &str = "max";
const COL_MIN: &str = "min";

/// Mean, maximum and minimum fahrenheit temperature over a filtered set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Formats the statistics the way the dashboard's metric row shows them.
///
/// # Examples
///
/// ```
/// use weather_dashboard::TemperatureStats;
///
/// let stats = TemperatureStats { mean: 53.64, max: 80.6, min: 26.6 };
/// assert_eq!(stats.to_string(), "Average 53.6°F, Maximum 80.6°F, Minimum 26.6°F");
/// ```
impl fmt::Display for TemperatureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average {:.1}°F, Maximum {:.1}°F, Minimum {:.1}°F",
            self.mean, self.max, self.min
        )
    }
}

/// Mean fahrenheit temperature per year (rows) and day of year (columns 1-366).
///
/// Only years with at least one filtered observation get a row. A cell without any
/// observation is `None`; it is never filled with zero.
///
/// The scalar statistics over the filtered observations travel with the grid. When the
/// filter selects nothing the grid is empty and [`HeatmapGrid::statistics`] reports
/// [`AggregationError::NoDataInRange`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGrid {
    filter: FilterSpec,
    years: Vec<i32>,
    cells: Vec<Vec<Option<f64>>>,
    stats: Option<TemperatureStats>,
}

impl HeatmapGrid {
    /// The filter this grid was computed for.
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Row labels, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// All rows, in the same order as [`HeatmapGrid::years`]. Each row has 366 cells.
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.cells
    }

    /// The 366 cells of `year`, index 0 being January 1st.
    pub fn row(&self, year: i32) -> Option<&[Option<f64>]> {
        let index = self.years.binary_search(&year).ok()?;
        self.cells.get(index).map(Vec::as_slice)
    }

    /// Mean temperature for `year` on `day_of_year` (1-366), if any observation exists.
    pub fn cell(&self, year: i32, day_of_year: u32) -> Option<f64> {
        let index = usize::try_from(day_of_year).ok()?.checked_sub(1)?;
        self.row(year)?.get(index).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Statistics over the filtered observations.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::NoDataInRange`] when the filter selected no observations,
    /// since mean, maximum and minimum are undefined then.
    pub fn statistics(&self) -> Result<TemperatureStats, AggregationError> {
        self.stats.ok_or_else(|| AggregationError::NoDataInRange {
            filter: self.filter,
        })
    }

    /// Column positions (day of year) and labels for month ticks on the x axis.
    pub fn month_ticks() -> impl Iterator<Item = (u32, &'static str)> {
        MONTH_START_DAYS.into_iter().zip(MONTH_LABELS)
    }

    /// Years labelled on the y axis: every row year divisible by five.
    pub fn year_ticks(&self) -> Vec<i32> {
        self.years
            .iter()
            .copied()
            .filter(|year| year % 5 == 0)
            .collect()
    }
}

/// Computes the heatmap grid and its statistics for the observations passing `filter`.
///
/// # Errors
///
/// Returns [`AggregationError::DataFrameProcessing`] if a Polars operation fails. An empty
/// selection is not an error here; see [`HeatmapGrid::statistics`].
pub fn compute_heatmap_grid(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<HeatmapGrid, AggregationError> {
    let selection = filtered(dataset, filter).collect()?;
    debug!(
        "Computing heatmap for {} ({} observations)",
        filter,
        selection.height()
    );

    let grouped = group_mean(selection.clone().lazy(), &[COL_YEAR, COL_DAY_OF_YEAR])?;
    let years = int_values(&grouped, COL_YEAR)?;
    let days = int_values(&grouped, COL_DAY_OF_YEAR)?;
    let means = float_values(&grouped, COL_FTEMP)?;

    let mut rows: BTreeMap<i32, Vec<Option<f64>>> = BTreeMap::new();
    for ((year, day), mean) in years.into_iter().zip(days).zip(means) {
        let (Some(year), Some(day)) = (year, day) else {
            continue;
        };
        let Some(index) = usize::try_from(day).ok().and_then(|d| d.checked_sub(1)) else {
            continue;
        };
        if index >= DAYS_IN_LEAP_YEAR {
            continue;
        }
        let row = rows
            .entry(year)
            .or_insert_with(|| vec![None; DAYS_IN_LEAP_YEAR]);
        row[index] = mean;
    }

    let stats = if selection.height() == 0 {
        None
    } else {
        summarize(selection.lazy())?
    };

    let (years, cells) = rows.into_iter().unzip();
    Ok(HeatmapGrid {
        filter: *filter,
        years,
        cells,
        stats,
    })
}

fn summarize(selection: LazyFrame) -> Result<Option<TemperatureStats>, AggregationError> {
    let summary = selection
        .select([
            col(COL_FTEMP).mean().alias(COL_MEAN),
            col(COL_FTEMP).max().alias(COL_MAX),
            col(COL_FTEMP).min().alias(COL_MIN),
        ])
        .collect()?;

    let stats = match (
        first_float(&summary, COL_MEAN)?,
        first_float(&summary, COL_MAX)?,
        first_float(&summary, COL_MIN)?,
    ) {
        (Some(mean), Some(max), Some(min)) => Some(TemperatureStats { mean, max, min }),
        _ => None,
    };
    Ok(stats)
}
