// monthly.rs

//! Builds the year × month mean temperature table behind the monthly averages chart.

use crate::aggregation::error::AggregationError;
use crate::aggregation::frame::{filtered, float_values, group_mean, int_values};
use crate::dataset::schema::{COL_FTEMP, COL_MONTH, COL_YEAR};
use crate::dataset::weather_dataset::Dataset;
use crate::types::calendar::month_label;
use crate::types::filter_spec::FilterSpec;
use log::debug;
use serde::Serialize;

/// Mean fahrenheit temperature of one month in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyMean {
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    pub mean_temp: f64,
}

impl MonthlyMean {
    /// Abbreviated month name for the x axis.
    pub fn month_label(&self) -> &'static str {
        month_label(self.month).unwrap_or("")
    }
}

/// One [`MonthlyMean`] per year/month combination present in the filtered data,
/// sorted by year and then month. Each year is drawn as its own line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTable {
    filter: FilterSpec,
    rows: Vec<MonthlyMean>,
}

impl MonthlyTable {
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn rows(&self) -> &[MonthlyMean] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct years in the table, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|row| row.year).collect();
        years.dedup();
        years
    }

    /// The rows of a single year, i.e. one line of the chart.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &MonthlyMean> + '_ {
        self.rows.iter().filter(move |row| row.year == year)
    }

    /// Lowest and highest monthly mean widened by `padding` on both sides.
    ///
    /// Used to pin the y axis of the animated chart so it does not rescale between
    /// frames; the dashboard uses a padding of 5 °F. `None` when the table is empty.
    pub fn value_range(&self, padding: f64) -> Option<(f64, f64)> {
        let mut temps = self.rows.iter().map(|row| row.mean_temp);
        let first = temps.next()?;
        let (min, max) = temps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some((min - padding, max + padding))
    }
}

/// Averages the fahrenheit temperature per `(year, month)` over the observations
/// passing `filter`.
///
/// An empty selection yields an empty table.
///
/// # Errors
///
/// Returns [`AggregationError::DataFrameProcessing`] if a Polars operation fails.
pub fn compute_monthly_table(
    dataset: &Dataset,
    filter: &FilterSpec,
) -> Result<MonthlyTable, AggregationError> {
    debug!("Computing monthly averages for {}", filter);
    let grouped = group_mean(filtered(dataset, filter), &[COL_YEAR, COL_MONTH])?;

    let years = int_values(&grouped, COL_YEAR)?;
    let months = int_values(&grouped, COL_MONTH)?;
    let means = float_values(&grouped, COL_FTEMP)?;

    let mut rows: Vec<MonthlyMean> = years
        .into_iter()
        .zip(months)
        .zip(means)
        .filter_map(|((year, month), mean)| {
            Some(MonthlyMean {
                year: year?,
                month: u32::try_from(month?).ok()?,
                mean_temp: mean?,
            })
        })
        .collect();
    rows.sort_by_key(|row| (row.year, row.month));

    Ok(MonthlyTable {
        filter: *filter,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, daily_readings};
    use crate::types::observation::kelvin_to_fahrenheit;
    use crate::types::season::Season;

    #[test]
    fn test_monthly_means() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings([
            (date(2020, 1, 1), 270.0),
            (date(2020, 1, 31), 280.0),
            (date(2020, 2, 10), 275.0),
            (date(2019, 12, 25), 265.0),
        ])?;
        let table = compute_monthly_table(&dataset, &FilterSpec::year_range(2019, 2020)?)?;

        let keys: Vec<_> = table.rows().iter().map(|r| (r.year, r.month)).collect();
        assert_eq!(keys, vec![(2019, 12), (2020, 1), (2020, 2)]);

        let january = table.rows()[1];
        let expected = (kelvin_to_fahrenheit(270.0) + kelvin_to_fahrenheit(280.0)) / 2.0;
        assert!((january.mean_temp - expected).abs() < 1e-9);
        assert_eq!(january.month_label(), "Jan");

        assert_eq!(table.years(), vec![2019, 2020]);
        assert_eq!(table.for_year(2020).count(), 2);
        Ok(())
    }

    #[test]
    fn test_one_row_per_observed_month() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings(daily_readings(1990, 1994))?;
        let table = compute_monthly_table(&dataset, &FilterSpec::year_range(1990, 1994)?)?;
        assert_eq!(table.rows().len(), 5 * 12);

        let winter = compute_monthly_table(
            &dataset,
            &FilterSpec::new(1990, 1994, Season::Winter)?,
        )?;
        assert_eq!(winter.rows().len(), 5 * 3);
        assert!(winter.rows().iter().all(|r| [12, 1, 2].contains(&r.month)));
        Ok(())
    }

    #[test]
    fn test_table_is_invariant_under_reordering() -> Result<(), Box<dyn std::error::Error>> {
        let readings = daily_readings(1970, 1972);
        let mut shuffled = readings.clone();
        shuffled.rotate_left(100);
        shuffled.reverse();

        let filter = FilterSpec::year_range(1970, 1972)?;
        let a = compute_monthly_table(&Dataset::from_readings(readings)?, &filter)?;
        let b = compute_monthly_table(&Dataset::from_readings(shuffled)?, &filter)?;

        assert_eq!(a.rows().len(), b.rows().len());
        for (x, y) in a.rows().iter().zip(b.rows()) {
            assert_eq!((x.year, x.month), (y.year, y.month));
            assert!((x.mean_temp - y.mean_temp).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_empty_selection() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings(daily_readings(2000, 2001))?;
        let table = compute_monthly_table(&dataset, &FilterSpec::year_range(1900, 1910)?)?;
        assert!(table.is_empty());
        assert_eq!(table.value_range(5.0), None);
        Ok(())
    }

    #[test]
    fn test_value_range() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings([
            (date(2020, 1, 1), 270.15),
            (date(2020, 7, 1), 300.15),
            (date(2020, 4, 1), 285.0),
        ])?;
        let table = compute_monthly_table(&dataset, &FilterSpec::year_range(2020, 2020)?)?;
        let (lo, hi) = table.value_range(5.0).unwrap();
        assert!((lo - 21.6).abs() < 1e-9);
        assert!((hi - 85.6).abs() < 1e-9);
        Ok(())
    }
}
