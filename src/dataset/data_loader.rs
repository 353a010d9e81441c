use crate::dataset::error::DatasetError;
use crate::dataset::schema::{COL_KTEMP, COL_TIME, MISSING_VALUE_MARKERS, REQUIRED_COLUMNS};
use crate::dataset::weather_dataset::Dataset;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tokio::task;

pub struct WeatherDataLoader {
    data_path: PathBuf,
}

impl WeatherDataLoader {
    pub fn new(data_path: &Path) -> WeatherDataLoader {
        WeatherDataLoader {
            data_path: data_path.to_path_buf(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Reads the CSV file and derives the dataset columns on a blocking task.
    pub async fn read_dataset(&self) -> Result<Dataset, DatasetError> {
        let path = self.data_path.clone();
        info!("Loading weather data from {:?}", path);

        let dataset = task::spawn_blocking(move || {
            let df = Self::read_csv(&path)?;
            Self::validate_schema(&df, &path)?;

            if df.height() == 0 {
                warn!("Weather data at {:?} has a header but no rows", path);
                return Dataset::from_readings(std::iter::empty());
            }

            Dataset::from_source_frame(df)
        })
        .await??;

        info!(
            "Loaded {} observations spanning {:?} from {:?}",
            dataset.len(),
            dataset.year_bounds(),
            self.data_path
        );
        Ok(dataset)
    }

    /// Parses the file with a header row, letting Polars detect date and datetime columns.
    /// Empty cells and the usual missing-value markers (`NA`, `NaN`, `null`, ...) become nulls.
    fn read_csv(path: &Path) -> Result<DataFrame, DatasetError> {
        let null_values = NullValues::AllColumns(
            MISSING_VALUE_MARKERS
                .into_iter()
                .map(PlSmallStr::from_static)
                .collect(),
        );
        CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(
                CsvParseOptions::default()
                    .with_try_parse_dates(true)
                    .with_null_values(Some(null_values)),
            )
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| DatasetError::DataUnavailable(path.to_path_buf(), e))?
            .finish()
            .map_err(|e| DatasetError::DataUnavailable(path.to_path_buf(), e))
    }

    fn validate_schema(df: &DataFrame, path: &Path) -> Result<(), DatasetError> {
        for column in REQUIRED_COLUMNS {
            if df.get_column_index(column).is_none() {
                warn!("Required column '{}' missing from {:?}", column, path);
                return Err(DatasetError::SchemaError {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                });
            }
        }

        // A header-only file has no values to infer types from
        if df.height() == 0 {
            return Ok(());
        }

        let time_type = df.column(COL_TIME)?.dtype();
        if !matches!(time_type, DataType::Date | DataType::Datetime(_, _)) {
            return Err(DatasetError::UnparsableColumn {
                path: path.to_path_buf(),
                column: COL_TIME.to_string(),
                dtype: time_type.to_string(),
            });
        }

        let temp_type = df.column(COL_KTEMP)?.dtype();
        if !matches!(
            temp_type,
            DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32
        ) {
            return Err(DatasetError::UnparsableColumn {
                path: path.to_path_buf(),
                column: COL_KTEMP.to_string(),
                dtype: temp_type.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::heatmap::compute_heatmap_grid;
    use crate::aggregation::yearly::compute_yearly_series;
    use crate::test_support::write_csv;
    use crate::types::filter_spec::FilterSpec;

    #[tokio::test]
    async fn test_read_dates() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv("time,Ktemp\n2020-01-15,270.15\n2020-07-15,300.15\n")?;
        let dataset = WeatherDataLoader::new(file.path()).read_dataset().await?;

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.year_bounds(), Some((2020, 2020)));
        let observations = dataset.observations()?;
        assert_eq!(observations[1].month, 7);
        assert!((observations[1].temperature_fahrenheit - 80.6).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_read_datetimes_and_extra_columns() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(
            "station,time,Ktemp\nNYC,1950-01-01 00:00:00,268.5\nNYC,1950-03-02 00:00:00,275\n",
        )?;
        let dataset = WeatherDataLoader::new(file.path()).read_dataset().await?;

        let observations = dataset.observations()?;
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].year, 1950);
        assert_eq!(observations[1].day_of_year, 61);
        assert_eq!(observations[1].temperature_kelvin, 275.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_values_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv(
            "time,Ktemp\n\
             2020-01-15,270.15\n\
             2020-01-16,NaN\n\
             2020-01-17,NA\n\
             2020-01-18,\n\
             2020-01-19,null\n\
             2020-07-15,300.15\n",
        )?;
        let dataset = WeatherDataLoader::new(file.path()).read_dataset().await?;

        let observations = dataset.observations()?;
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].day_of_year, 15);
        assert_eq!(observations[1].month, 7);

        let filter = FilterSpec::year_range(2020, 2020)?;
        let stats = compute_heatmap_grid(&dataset, &filter)?.statistics()?;
        assert!((stats.mean - 53.6).abs() < 1e-9);
        let yearly = compute_yearly_series(&dataset, &filter)?;
        assert!((yearly.points()[0].mean_temp - 53.6).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        let err = WeatherDataLoader::new(&path)
            .read_dataset()
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::DataUnavailable(ref p, _) if *p == path));
        assert!(err.is_data_unavailable());
    }

    #[tokio::test]
    async fn test_missing_column_is_schema_error() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv("time,Ctemp\n2020-01-15,-3.0\n")?;
        let err = WeatherDataLoader::new(file.path())
            .read_dataset()
            .await
            .unwrap_err();

        assert!(matches!(err, DatasetError::SchemaError { ref column, .. } if column == "Ktemp"));
        assert!(!err.is_data_unavailable());
        Ok(())
    }

    #[tokio::test]
    async fn test_unparsable_time_is_data_unavailable() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv("time,Ktemp\nyesterday,270.0\nlast week,271.0\n")?;
        let err = WeatherDataLoader::new(file.path())
            .read_dataset()
            .await
            .unwrap_err();

        assert!(matches!(err, DatasetError::UnparsableColumn { ref column, .. } if column == "time"));
        assert!(err.is_data_unavailable());
        Ok(())
    }

    #[tokio::test]
    async fn test_header_only_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let file = write_csv("time,Ktemp\n")?;
        let dataset = WeatherDataLoader::new(file.path()).read_dataset().await?;
        assert!(dataset.is_empty());
        Ok(())
    }
}
