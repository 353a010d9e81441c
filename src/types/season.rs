//! Defines the seasons a caller can restrict the dashboard views to.

use crate::error::DashboardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A fixed grouping of calendar months, or the unfiltered full year.
///
/// Used in a [`crate::FilterSpec`] to keep only observations from the season's months.
///
/// Winter groups December of a year with January and February of the *same* calendar
/// year, not with the following meteorological winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Season {
    /// No month restriction.
    #[default]
    AllYear,
    /// December, January and February.
    Winter,
    /// March, April and May.
    Spring,
    /// June, July and August.
    Summer,
    /// September, October and November.
    Fall,
}

impl Season {
    /// Every season in the order a season selector lists them.
    pub const ALL: [Season; 5] = [
        Season::AllYear,
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Fall,
    ];

    /// The months (1-12) belonging to this season, or `None` for [`Season::AllYear`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_dashboard::Season;
    ///
    /// assert_eq!(Season::Winter.months(), Some([12, 1, 2]));
    /// assert_eq!(Season::AllYear.months(), None);
    /// ```
    pub fn months(self) -> Option<[i32; 3]> {
        match self {
            Season::AllYear => None,
            Season::Winter => Some([12, 1, 2]),
            Season::Spring => Some([3, 4, 5]),
            Season::Summer => Some([6, 7, 8]),
            Season::Fall => Some([9, 10, 11]),
        }
    }

    /// Whether an observation from `month` passes this season's filter.
    pub fn contains_month(self, month: i32) -> bool {
        match self.months() {
            None => (1..=12).contains(&month),
            Some(months) => months.contains(&month),
        }
    }

    /// Label shown in the season selector.
    pub fn label(&self) -> &'static str {
        match self {
            Season::AllYear => "All Year",
            Season::Winter => "Winter (Dec-Feb)",
            Season::Spring => "Spring (Mar-May)",
            Season::Summer => "Summer (Jun-Aug)",
            Season::Fall => "Fall (Sep-Nov)",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            Season::AllYear => "all year",
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

/// Formats a `Season` using its selector label.
///
/// # Examples
///
/// ```
/// use weather_dashboard::Season;
///
/// assert_eq!(Season::Summer.to_string(), "Summer (Jun-Aug)");
/// ```
impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses either the selector label (`"Winter (Dec-Feb)"`) or the short name (`"winter"`),
/// ignoring case and surrounding whitespace.
impl FromStr for Season {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| {
                season.label().eq_ignore_ascii_case(wanted)
                    || season.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DashboardError::InvalidSeason(s.to_string()))
    }
}
