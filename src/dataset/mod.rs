pub mod data_loader;
pub mod dataset_loader;
pub mod error;
pub mod schema;
pub mod weather_dataset;

use crate::dataset::dataset_loader::DatasetLoader;
use crate::dataset::weather_dataset::Dataset;
use crate::error::DashboardError;
use crate::utils::get_data_path;
use std::sync::{Arc, OnceLock};

static DEFAULT_LOADER: OnceLock<DatasetLoader> = OnceLock::new();

/// Returns the process-wide dataset, read from the configured data path on first use.
///
/// The path is resolved once per process (see [`crate::get_data_path`]); every later
/// call returns the same cached [`Dataset`].
///
/// # Errors
///
/// Returns [`DashboardError::Dataset`] if the file cannot be read or parsed or lacks a
/// required column.
pub async fn load() -> Result<Arc<Dataset>, DashboardError> {
    Ok(default_loader().load().await?)
}

/// The loader behind [`load`], created on first use.
pub(crate) fn default_loader() -> &'static DatasetLoader {
    DEFAULT_LOADER.get_or_init(|| DatasetLoader::new(&get_data_path()))
}
