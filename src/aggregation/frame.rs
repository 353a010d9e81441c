use crate::aggregation::error::AggregationError;
use crate::dataset::schema::COL_FTEMP;
use crate::dataset::weather_dataset::Dataset;
use crate::filtering::WeatherFrameFilterExt;
use crate::types::filter_spec::FilterSpec;
use polars::prelude::*;

/// Lazily applies the shared filter step to the dataset.
pub(crate) fn filtered(dataset: &Dataset, filter: &FilterSpec) -> LazyFrame {
    dataset.lazy().filter_spec(filter)
}

/// Groups `frame` by `keys` and averages the fahrenheit temperature of every group.
/// The mean column keeps the name `Ftemp`.
pub(crate) fn group_mean(frame: LazyFrame, keys: &[&str]) -> Result<DataFrame, AggregationError> {
    let keys: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    Ok(frame
        .group_by(keys)
        .agg([col(COL_FTEMP).mean().alias(COL_FTEMP)])
        .collect()?)
}

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, AggregationError> {
    df.column(name)
        .map_err(|e| AggregationError::ColumnNotFound(name.to_string(), e))
}

pub(crate) fn int_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>, AggregationError> {
    Ok(get_column(df, name)?.i32()?.into_iter().collect())
}

pub(crate) fn float_values(
    df: &DataFrame,
    name: &str,
) -> Result<Vec<Option<f64>>, AggregationError> {
    Ok(get_column(df, name)?.f64()?.into_iter().collect())
}

/// Reads a single float from row 0, `None` if the frame is empty or the value is null.
pub(crate) fn first_float(df: &DataFrame, name: &str) -> Result<Option<f64>, AggregationError> {
    let values = get_column(df, name)?.f64()?;
    if values.is_empty() {
        return Ok(None);
    }
    Ok(values.get(0))
}
