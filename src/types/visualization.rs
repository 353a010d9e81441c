use serde::Serialize;
use std::fmt;

/// The chart the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum VisualizationKind {
    /// Year × day-of-year mean temperature grid.
    #[default]
    Heatmap,
    /// One line of monthly means per year.
    MonthlyAverages,
    /// Yearly means with a least-squares trend line.
    YearlyTrend,
}

impl VisualizationKind {
    pub const ALL: [VisualizationKind; 3] = [
        VisualizationKind::Heatmap,
        VisualizationKind::MonthlyAverages,
        VisualizationKind::YearlyTrend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisualizationKind::Heatmap => "Heatmap",
            VisualizationKind::MonthlyAverages => "Monthly Averages",
            VisualizationKind::YearlyTrend => "Yearly Trend",
        }
    }

    /// Section header shown above the chart.
    pub fn title(&self) -> &'static str {
        match self {
            VisualizationKind::Heatmap => "Temperature Heatmap",
            VisualizationKind::MonthlyAverages => "Monthly Average Temperatures",
            VisualizationKind::YearlyTrend => "Yearly Temperature Trends",
        }
    }
}

impl fmt::Display for VisualizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
