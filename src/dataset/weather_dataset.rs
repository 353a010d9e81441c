//! Contains the immutable [`Dataset`] every dashboard view is computed from.

use crate::dataset::error::DatasetError;
use crate::dataset::schema::{COL_DAY_OF_YEAR, COL_FTEMP, COL_KTEMP, COL_MONTH, COL_TIME, COL_YEAR};
use crate::types::observation::{fahrenheit_expr, Observation};
use chrono::NaiveDate;
use polars::prelude::*;

/// An ordered, immutable collection of temperature observations.
///
/// Backed by a Polars `DataFrame` with the columns `time` (Date), `Ktemp`, `year`,
/// `month`, `day_of_year` and `Ftemp`. The derived columns are computed once, when the
/// dataset is built, and the frame is never mutated afterwards. Rows whose date or
/// temperature is missing (null or NaN) are dropped during construction.
///
/// Instances are normally obtained through [`crate::DatasetLoader::load`] or
/// [`crate::load`]; [`Dataset::from_readings`] builds one from in-memory values.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    year_bounds: Option<(i32, i32)>,
}

impl Dataset {
    /// Builds a dataset from `(date, kelvin)` readings, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weather_dashboard::Dataset;
    ///
    /// let dataset = Dataset::from_readings([
    ///     (NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(), 270.15),
    ///     (NaiveDate::from_ymd_opt(2020, 7, 15).unwrap(), 300.15),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(dataset.len(), 2);
    /// assert_eq!(dataset.year_bounds(), Some((2020, 2020)));
    /// ```
    pub fn from_readings<I>(readings: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let (dates, kelvin): (Vec<NaiveDate>, Vec<f64>) = readings.into_iter().unzip();
        let source = DataFrame::new(vec![
            Column::new(COL_TIME.into(), dates),
            Column::new(COL_KTEMP.into(), kelvin),
        ])?;
        Self::from_source_frame(source)
    }

    /// Builds a dataset from observations, re-deriving their fields from date and kelvin.
    pub fn from_observations(observations: &[Observation]) -> Result<Self, DatasetError> {
        Self::from_readings(
            observations
                .iter()
                .map(|obs| (obs.timestamp, obs.temperature_kelvin)),
        )
    }

    /// Derives the calendar and fahrenheit columns from a frame holding at least a
    /// temporal `time` column and a numeric `Ktemp` column.
    pub(crate) fn from_source_frame(source: DataFrame) -> Result<Self, DatasetError> {
        let frame = source
            .lazy()
            .select([
                col(COL_TIME).cast(DataType::Date).alias(COL_TIME),
                col(COL_KTEMP).cast(DataType::Float64).alias(COL_KTEMP),
            ])
            .filter(
                col(COL_TIME)
                    .is_not_null()
                    .and(col(COL_KTEMP).is_not_null())
                    .and(col(COL_KTEMP).is_not_nan()),
            )
            .with_columns([
                col(COL_TIME).dt().year().cast(DataType::Int32).alias(COL_YEAR),
                col(COL_TIME).dt().month().cast(DataType::Int32).alias(COL_MONTH),
                col(COL_TIME)
                    .dt()
                    .ordinal_day()
                    .cast(DataType::Int32)
                    .alias(COL_DAY_OF_YEAR),
                fahrenheit_expr(col(COL_KTEMP)).alias(COL_FTEMP),
            ])
            .collect()?;

        let years = frame.column(COL_YEAR)?.i32()?;
        let year_bounds = years.min().zip(years.max());

        Ok(Self { frame, year_bounds })
    }

    /// The underlying frame, including the derived columns.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A `LazyFrame` over the dataset, the starting point of every aggregation.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Smallest and largest year present, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.year_bounds
    }

    /// Extracts every row as a typed [`Observation`], in dataset order.
    pub fn observations(&self) -> Result<Vec<Observation>, DatasetError> {
        let years = self.frame.column(COL_YEAR)?.i32()?;
        let months = self.frame.column(COL_MONTH)?.i32()?;
        let days = self.frame.column(COL_DAY_OF_YEAR)?.i32()?;
        let kelvin = self.frame.column(COL_KTEMP)?.f64()?;
        let fahrenheit = self.frame.column(COL_FTEMP)?.f64()?;

        let observations = years
            .into_iter()
            .zip(months)
            .zip(days)
            .zip(kelvin)
            .zip(fahrenheit)
            .filter_map(|((((year, month), day), kelvin), fahrenheit)| {
                let year = year?;
                let day_of_year = u32::try_from(day?).ok()?;
                Some(Observation {
                    timestamp: NaiveDate::from_yo_opt(year, day_of_year)?,
                    temperature_kelvin: kelvin?,
                    year,
                    month: u32::try_from(month?).ok()?,
                    day_of_year,
                    temperature_fahrenheit: fahrenheit?,
                })
            })
            .collect();

        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::kelvin_to_fahrenheit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derived_columns() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings([
            (date(2020, 1, 15), 270.15),
            (date(2020, 7, 15), 300.15),
            (date(2021, 12, 31), 265.0),
        ])?;

        let observations = dataset.observations()?;
        assert_eq!(observations.len(), 3);

        assert_eq!(observations[0].year, 2020);
        assert_eq!(observations[0].month, 1);
        assert_eq!(observations[0].day_of_year, 15);
        assert!((observations[0].temperature_fahrenheit - 26.6).abs() < 1e-9);

        assert_eq!(observations[1].month, 7);
        // 2020 is a leap year: Jan (31) + Feb (29) + ... + Jun (30) + 15
        assert_eq!(observations[1].day_of_year, 197);
        assert!((observations[1].temperature_fahrenheit - 80.6).abs() < 1e-9);

        assert_eq!(observations[2].timestamp, date(2021, 12, 31));
        assert_eq!(observations[2].day_of_year, 365);
        Ok(())
    }

    #[test]
    fn test_fahrenheit_is_reproducible() -> Result<(), Box<dyn std::error::Error>> {
        let readings: Vec<(NaiveDate, f64)> = (0..400)
            .map(|i| {
                let day = date(1999, 1, 1) + chrono::Duration::days(i);
                (day, 250.0 + (i as f64) * 0.173)
            })
            .collect();
        let dataset = Dataset::from_readings(readings.clone())?;

        for (obs, (day, kelvin)) in dataset.observations()?.iter().zip(&readings) {
            assert_eq!(obs.timestamp, *day);
            assert_eq!(obs.temperature_kelvin, *kelvin);
            assert_eq!(obs.temperature_fahrenheit, kelvin_to_fahrenheit(*kelvin));
            assert_eq!(*obs, Observation::new(*day, *kelvin));
        }
        Ok(())
    }

    #[test]
    fn test_year_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings([
            (date(1987, 3, 1), 280.0),
            (date(1950, 6, 1), 290.0),
            (date(2023, 9, 1), 285.0),
        ])?;
        assert_eq!(dataset.year_bounds(), Some((1950, 2023)));
        Ok(())
    }

    #[test]
    fn test_empty_dataset() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings(Vec::new())?;
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_bounds(), None);
        assert!(dataset.observations()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_nan_readings_are_dropped() -> Result<(), Box<dyn std::error::Error>> {
        let dataset = Dataset::from_readings([
            (date(2020, 1, 15), 270.15),
            (date(2020, 1, 16), f64::NAN),
            (date(2020, 7, 15), 300.15),
        ])?;

        assert_eq!(dataset.len(), 2);
        let observations = dataset.observations()?;
        assert!(observations
            .iter()
            .all(|obs| obs.temperature_fahrenheit.is_finite()));
        assert_eq!(observations[1].timestamp, date(2020, 7, 15));
        Ok(())
    }

    #[test]
    fn test_from_observations_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let original = vec![
            Observation::new(date(2001, 2, 3), 271.0),
            Observation::new(date(2002, 4, 5), 282.5),
        ];
        let dataset = Dataset::from_observations(&original)?;
        assert_eq!(dataset.observations()?, original);
        Ok(())
    }
}
