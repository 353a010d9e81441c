use crate::aggregation::error::AggregationError;
use crate::dataset::error::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error("Invalid year range: {min_year} is after {max_year}")]
    InvalidYearRange { min_year: i32, max_year: i32 },

    #[error("Unknown season '{0}'")]
    InvalidSeason(String),

    #[error("The dataset contains no observations, so no default year range exists")]
    EmptyDataset,
}
