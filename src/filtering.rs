use crate::dataset::schema::{COL_MONTH, COL_YEAR};
use crate::types::filter_spec::FilterSpec;
use crate::types::season::Season;
use polars::prelude::{col, lit, LazyFrame};

/// Filters applied to a dataset `LazyFrame` before any aggregation.
///
/// All filters are lazy; nothing is computed until the frame is collected.
pub trait WeatherFrameFilterExt {
    /// Keeps rows whose `year` column lies in `[min_year, max_year]`.
    fn filter_year_range(self, min_year: i32, max_year: i32) -> LazyFrame;

    /// Keeps rows whose `month` column belongs to `season`.
    /// [`Season::AllYear`] leaves the frame untouched.
    fn filter_season(self, season: Season) -> LazyFrame;

    /// Applies the year range and then the season of `spec`.
    fn filter_spec(self, spec: &FilterSpec) -> LazyFrame;
}

impl WeatherFrameFilterExt for LazyFrame {
    fn filter_year_range(self, min_year: i32, max_year: i32) -> LazyFrame {
        self.filter(
            col(COL_YEAR)
                .gt_eq(lit(min_year))
                .and(col(COL_YEAR).lt_eq(lit(max_year))),
        )
    }

    fn filter_season(self, season: Season) -> LazyFrame {
        let Some(months) = season.months() else {
            return self;
        };
        let predicate = months
            .into_iter()
            .map(|month| col(COL_MONTH).eq(lit(month)))
            .reduce(|acc, expr| acc.or(expr));

        match predicate {
            Some(predicate) => self.filter(predicate),
            None => self,
        }
    }

    fn filter_spec(self, spec: &FilterSpec) -> LazyFrame {
        self.filter_year_range(spec.min_year(), spec.max_year())
            .filter_season(spec.season())
    }
}
