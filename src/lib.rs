mod aggregation;
mod dashboard;
mod dataset;
mod error;
mod filtering;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use dashboard::WeatherDashboard;
pub use error::DashboardError;
pub use filtering::WeatherFrameFilterExt;
pub use utils::{get_data_path, DATA_PATH_ENV};

pub use dataset::dataset_loader::DatasetLoader;
pub use dataset::load;
pub use dataset::weather_dataset::Dataset;

pub use aggregation::heatmap::{compute_heatmap_grid, HeatmapGrid, TemperatureStats};
pub use aggregation::monthly::{compute_monthly_table, MonthlyMean, MonthlyTable};
pub use aggregation::view::{AggregatedView, Visualization};
pub use aggregation::yearly::{
    compute_yearly_series, LinearTrend, TemperatureChange, TrendDirection, YearlyMean,
    YearlySeries,
};

pub use types::calendar::{month_label, MONTH_LABELS, MONTH_START_DAYS};
pub use types::filter_spec::FilterSpec;
pub use types::observation::{kelvin_to_fahrenheit, Observation};
pub use types::season::Season;
pub use types::visualization::VisualizationKind;

pub use aggregation::error::AggregationError;
pub use dataset::error::DatasetError;
