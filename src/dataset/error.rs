use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    // Covers a missing or unreadable file as well as malformed CSV
    #[error("Weather data at '{0}' could not be read")]
    DataUnavailable(PathBuf, #[source] PolarsError),

    #[error("Column '{column}' in '{path}' could not be parsed (found type {dtype})")]
    UnparsableColumn {
        path: PathBuf,
        column: String,
        dtype: String,
    },

    #[error("Required column '{column}' not found in '{path}'")]
    SchemaError { path: PathBuf, column: String },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}

impl DatasetError {
    /// Whether the source could not be read or parsed, as opposed to a schema problem.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            DatasetError::DataUnavailable(..) | DatasetError::UnparsableColumn { .. }
        )
    }
}
