use crate::aggregation::error::AggregationError;
use crate::aggregation::heatmap::{compute_heatmap_grid, HeatmapGrid};
use crate::aggregation::monthly::{compute_monthly_table, MonthlyTable};
use crate::aggregation::yearly::{compute_yearly_series, YearlySeries};
use crate::dataset::weather_dataset::Dataset;
use crate::types::filter_spec::FilterSpec;
use crate::types::visualization::VisualizationKind;
use serde::Serialize;

/// Every derived view for one [`FilterSpec`], handed to the rendering layer as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedView {
    pub filter: FilterSpec,
    pub heatmap: HeatmapGrid,
    pub monthly: MonthlyTable,
    pub yearly: YearlySeries,
}

impl AggregatedView {
    /// Computes all three views.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::NoDataInRange`] if no observation passes `filter`,
    /// because the yearly series is undefined then.
    pub fn compute(dataset: &Dataset, filter: &FilterSpec) -> Result<Self, AggregationError> {
        Ok(Self {
            filter: *filter,
            heatmap: compute_heatmap_grid(dataset, filter)?,
            monthly: compute_monthly_table(dataset, filter)?,
            yearly: compute_yearly_series(dataset, filter)?,
        })
    }

    /// Serializes the view for a rendering layer that consumes JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The data behind a single chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum Visualization {
    Heatmap(HeatmapGrid),
    MonthlyAverages(MonthlyTable),
    YearlyTrend(YearlySeries),
}

impl Visualization {
    /// Computes only the view of the given kind.
    ///
    /// The heatmap and monthly views succeed with empty results when nothing passes
    /// `filter`; the yearly trend reports [`AggregationError::NoDataInRange`].
    pub fn compute(
        kind: VisualizationKind,
        dataset: &Dataset,
        filter: &FilterSpec,
    ) -> Result<Self, AggregationError> {
        Ok(match kind {
            VisualizationKind::Heatmap => {
                Visualization::Heatmap(compute_heatmap_grid(dataset, filter)?)
            }
            VisualizationKind::MonthlyAverages => {
                Visualization::MonthlyAverages(compute_monthly_table(dataset, filter)?)
            }
            VisualizationKind::YearlyTrend => {
                Visualization::YearlyTrend(compute_yearly_series(dataset, filter)?)
            }
        })
    }

    pub fn kind(&self) -> VisualizationKind {
        match self {
            Visualization::Heatmap(_) => VisualizationKind::Heatmap,
            Visualization::MonthlyAverages(_) => VisualizationKind::MonthlyAverages,
            Visualization::YearlyTrend(_) => VisualizationKind::YearlyTrend,
        }
    }
}
