use crate::dataset::data_loader::WeatherDataLoader;
use crate::dataset::error::DatasetError;
use crate::dataset::weather_dataset::Dataset;
use log::debug;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Loads a [`Dataset`] from a fixed location once and hands out the cached instance
/// afterwards.
///
/// The cached dataset is read-only, so a single `DatasetLoader` can be shared between
/// any number of concurrent sessions. If a load fails nothing is cached and the next
/// call tries again.
///
/// # Examples
///
/// ```no_run
/// # use weather_dashboard::{DatasetLoader, DashboardError};
/// # use std::path::Path;
/// # #[tokio::main]
/// # async fn main() -> Result<(), DashboardError> {
/// let loader = DatasetLoader::new(Path::new("data/weather.csv"));
///
/// let first = loader.load().await?;
/// let second = loader.load().await?;
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// # Ok(())
/// # }
/// ```
pub struct DatasetLoader {
    loader: WeatherDataLoader,
    dataset: OnceCell<Arc<Dataset>>,
}

impl DatasetLoader {
    pub fn new(data_path: &Path) -> Self {
        Self {
            loader: WeatherDataLoader::new(data_path),
            dataset: OnceCell::new(),
        }
    }

    /// Location the dataset is read from.
    pub fn data_path(&self) -> &Path {
        self.loader.data_path()
    }

    /// Whether the dataset has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.dataset.initialized()
    }

    /// Returns the dataset, reading it from disk on the first call only.
    ///
    /// Concurrent first calls wait for a single read instead of each reading the file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DataUnavailable`] or [`DatasetError::UnparsableColumn`] if the
    /// file cannot be read or parsed, and [`DatasetError::SchemaError`] if the `time` or
    /// `Ktemp` column is missing.
    pub async fn load(&self) -> Result<Arc<Dataset>, DatasetError> {
        if let Some(dataset) = self.dataset.get() {
            debug!("Dataset cache hit for {:?}", self.data_path());
            return Ok(dataset.clone());
        }

        let dataset = self
            .dataset
            .get_or_try_init(|| async { self.loader.read_dataset().await.map(Arc::new) })
            .await?;
        Ok(dataset.clone())
    }
}
