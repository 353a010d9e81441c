//! This module provides the main entry point for the dashboard backend. It loads the
//! temperature record once and recomputes the chart data whenever the user changes a
//! filter control.

use crate::aggregation::view::{AggregatedView, Visualization};
use crate::dataset::data_loader::WeatherDataLoader;
use crate::dataset::default_loader;
use crate::dataset::weather_dataset::Dataset;
use crate::error::DashboardError;
use crate::types::filter_spec::FilterSpec;
use crate::types::season::Season;
use crate::types::visualization::VisualizationKind;
use bon::bon;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The dashboard backend a rendering layer talks to.
///
/// Holds the loaded [`Dataset`] and turns filter changes into chart data. The dataset is
/// shared read-only; every call to [`WeatherDashboard::on_filter_change`] works on its own
/// [`FilterSpec`] and returns an independent [`AggregatedView`], so one dashboard can
/// serve several sessions at once.
///
/// Create an instance using [`WeatherDashboard::new()`] to share the process-wide dataset
/// read from the configured data path, or [`WeatherDashboard::with_data_path()`] for a
/// specific file.
///
/// # Examples
///
/// ```no_run
/// # use weather_dashboard::{WeatherDashboard, DashboardError, Season};
/// # #[tokio::main]
/// # async fn main() -> Result<(), DashboardError> {
/// let dashboard = WeatherDashboard::new().await?;
///
/// // Summer months from 2000 through 2010
/// let spec = dashboard
///     .filter()
///     .min_year(2000)
///     .max_year(2010)
///     .season(Season::Summer)
///     .call()?;
///
/// let view = dashboard.on_filter_change(&spec)?;
/// println!("{}", view.yearly.change());
/// # Ok(())
/// # }
/// ```
pub struct WeatherDashboard {
    data_path: PathBuf,
    dataset: Arc<Dataset>,
}

#[bon]
impl WeatherDashboard {
    /// Creates a dashboard reading the CSV file at `data_path`.
    ///
    /// The file is read immediately, so a broken source is reported here rather than on
    /// the first interaction.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Dataset`] if the file cannot be read or parsed or lacks
    /// the `time` or `Ktemp` column.
    pub async fn with_data_path(data_path: PathBuf) -> Result<Self, DashboardError> {
        let dataset = WeatherDataLoader::new(&data_path).read_dataset().await?;
        Ok(Self {
            data_path,
            dataset: Arc::new(dataset),
        })
    }

    /// Creates a dashboard over the process-wide dataset (see [`crate::load`]), read from
    /// the configured data path (`WEATHER_DATA_PATH`, or `data/weather.csv`) by the first
    /// caller and shared by every later one.
    ///
    /// # Errors
    ///
    /// See [`WeatherDashboard::with_data_path`].
    pub async fn new() -> Result<Self, DashboardError> {
        let loader = default_loader();
        let dataset = loader.load().await?;
        Ok(Self {
            data_path: loader.data_path().to_path_buf(),
            dataset,
        })
    }

    /// Location the dataset was read from.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Bounds for the year range slider: the first and last year in the dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.dataset.year_bounds()
    }

    /// Builds a [`FilterSpec`], filling unset controls with their initial values.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.min_year(i32)`: Optional. Defaults to the first year in the dataset.
    /// * `.max_year(i32)`: Optional. Defaults to the last year in the dataset.
    /// * `.season(Season)`: Optional. Defaults to [`Season::AllYear`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidYearRange`] if the resulting minimum exceeds the
    /// maximum, and [`DashboardError::EmptyDataset`] if a bound is left unset while the
    /// dataset has no observations.
    #[builder]
    pub fn filter(
        &self,
        min_year: Option<i32>,
        max_year: Option<i32>,
        season: Option<Season>,
    ) -> Result<FilterSpec, DashboardError> {
        let bounds = self.year_bounds();
        let min_year = match min_year {
            Some(year) => year,
            None => bounds.ok_or(DashboardError::EmptyDataset)?.0,
        };
        let max_year = match max_year {
            Some(year) => year,
            None => bounds.ok_or(DashboardError::EmptyDataset)?.1,
        };
        FilterSpec::new(min_year, max_year, season.unwrap_or_default())
    }

    /// Recomputes every chart for a changed filter.
    ///
    /// Pure with respect to the dataset: nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Aggregation`] wrapping
    /// [`crate::AggregationError::NoDataInRange`] if no observation passes `spec`.
    pub fn on_filter_change(&self, spec: &FilterSpec) -> Result<AggregatedView, DashboardError> {
        debug!("Filter changed to {}", spec);
        Ok(AggregatedView::compute(&self.dataset, spec)?)
    }

    /// Computes only the chart the user selected.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Aggregation`] wrapping
    /// [`crate::AggregationError::NoDataInRange`] for a yearly trend over an empty selection.
    pub fn visualize(
        &self,
        kind: VisualizationKind,
        spec: &FilterSpec,
    ) -> Result<Visualization, DashboardError> {
        debug!("Computing {} for {}", kind, spec);
        Ok(Visualization::compute(kind, &self.dataset, spec)?)
    }
}
