//! Defines the user-selected filters every dashboard view is computed from.

use crate::error::DashboardError;
use crate::types::season::Season;
use serde::Serialize;
use std::fmt;

/// The year range and season currently selected by the user.
///
/// A `FilterSpec` is rebuilt whenever a control changes and is never shared between
/// sessions. The year range is inclusive on both ends. A range lying outside the
/// dataset's years is valid and simply selects no observations.
///
/// # Examples
///
/// ```
/// use weather_dashboard::{FilterSpec, Season};
///
/// let spec = FilterSpec::new(2000, 2010, Season::Summer).unwrap();
/// assert_eq!(spec.min_year(), 2000);
/// assert_eq!(spec.max_year(), 2010);
/// assert_eq!(spec.to_string(), "2000-2010, Summer (Jun-Aug)");
///
/// // A reversed range is rejected
/// assert!(FilterSpec::new(2010, 2000, Season::AllYear).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FilterSpec {
    min_year: i32,
    max_year: i32,
    season: Season,
}

impl FilterSpec {
    /// Creates a filter for `[min_year, max_year]` restricted to `season`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidYearRange`] if `min_year > max_year`.
    pub fn new(min_year: i32, max_year: i32, season: Season) -> Result<Self, DashboardError> {
        if min_year > max_year {
            return Err(DashboardError::InvalidYearRange { min_year, max_year });
        }
        Ok(Self {
            min_year,
            max_year,
            season,
        })
    }

    /// Creates a filter for a year range without any season restriction.
    pub fn year_range(min_year: i32, max_year: i32) -> Result<Self, DashboardError> {
        Self::new(min_year, max_year, Season::AllYear)
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// Returns a copy of this filter with a different season.
    pub fn with_season(self, season: Season) -> Self {
        Self { season, ..self }
    }

    /// Whether an observation from `year`/`month` passes this filter.
    pub fn matches(&self, year: i32, month: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year) && self.season.contains_month(month)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}, {}", self.min_year, self.max_year, self.season)
    }
}
