use super::classify::{classify_series, numeric_values};
use super::types::{CleaningOptions, CleaningReport, ColumnKind, FillOutcome};
use crate::error::{Result, ResultExt as _};
use polars::prelude::*;
use std::collections::HashSet;

/// Replacement for missing cells in categorical columns.
pub const UNKNOWN_TOKEN: &str = "Unknown";

/// Applies the requested cleaning steps. Deduplication always runs before
/// filling so fill values come from the deduplicated rows.
///
/// # Errors
///
/// Returns error if Polars fails to cast or rebuild a column.
pub fn clean_df(df: &DataFrame, options: &CleaningOptions) -> Result<CleaningReport> {
    let (table, duplicates_removed) = if options.remove_duplicates {
        remove_duplicates(df).context("Failed to remove duplicate rows")?
    } else {
        (df.clone(), 0)
    };

    let (table, filled_cells, unfilled_columns) = if options.fill_missing {
        let outcome = fill_missing(&table).context("Failed to fill missing values")?;
        (outcome.table, outcome.filled_cells, outcome.unfilled_columns)
    } else {
        (table, 0, Vec::new())
    };

    tracing::debug!(
        rows = table.height(),
        duplicates_removed,
        filled_cells,
        "Cleaned table"
    );

    Ok(CleaningReport {
        table,
        duplicates_removed,
        filled_cells,
        unfilled_columns,
    })
}

/// Drops rows identical to an earlier row across every column, keeping the
/// first occurrence and the order of the rows that remain. Returns the new
/// table and the number of rows removed.
///
/// # Errors
///
/// Returns error if a column cannot be rendered as a string key.
pub fn remove_duplicates(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let height = df.height();
    if height == 0 || df.width() == 0 {
        return Ok((df.clone(), 0));
    }

    // String keys compare missing == missing, which is what row identity needs.
    let keys = df
        .get_columns()
        .iter()
        .map(|c| key_text(c.as_materialized_series()))
        .collect::<PolarsResult<Vec<_>>>()?;
    let cells = keys
        .iter()
        .map(|s| s.str())
        .collect::<PolarsResult<Vec<_>>>()?;

    let mut seen: HashSet<Vec<Option<&str>>> = HashSet::with_capacity(height);
    let mut keep = Vec::with_capacity(height);
    for row in 0..height {
        let key: Vec<Option<&str>> = cells.iter().map(|ca| ca.get(row)).collect();
        keep.push(seen.insert(key));
    }

    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed == 0 {
        return Ok((df.clone(), 0));
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok((df.filter(&mask)?, removed))
}

/// Text form of a column for row keys. Float zeros lose their sign so that
/// `-0.0` and `0.0` are the same value.
fn key_text(series: &Series) -> PolarsResult<Series> {
    if !series.dtype().is_float() {
        return series.cast(&DataType::String);
    }
    let floats = series.cast(&DataType::Float64)?;
    // IEEE addition of +0.0 maps -0.0 to +0.0 and leaves every other value alone.
    let unsigned: Vec<Option<f64>> = floats.f64()?.into_iter().map(|v| v.map(|x| x + 0.0)).collect();
    Series::new(series.name().clone(), unsigned).cast(&DataType::String)
}

/// Fills missing cells column by column: categorical columns get
/// [`UNKNOWN_TOKEN`], numeric columns get the mean of their own values.
///
/// Kinds and means are taken from the input table before anything is
/// replaced. A numeric column with no values has no mean; it is returned
/// unchanged and listed in [`FillOutcome::unfilled_columns`].
///
/// # Errors
///
/// Returns error if Polars fails to cast or rebuild a column.
pub fn fill_missing(df: &DataFrame) -> Result<FillOutcome> {
    let mut columns = Vec::with_capacity(df.width());
    let mut filled_cells = 0;
    let mut unfilled_columns = Vec::new();

    for col in df.get_columns() {
        let series = col.as_materialized_series();
        let name = series.name().clone();
        let nulls = series.null_count();

        match classify_series(series) {
            ColumnKind::Categorical => {
                if nulls == 0 {
                    columns.push(col.clone());
                    continue;
                }
                let text = series.cast(&DataType::String)?;
                let filled: Vec<&str> = text
                    .str()?
                    .into_iter()
                    .map(|v| v.unwrap_or(UNKNOWN_TOKEN))
                    .collect();
                columns.push(Series::new(name, filled).into_column());
                filled_cells += nulls;
            }
            ColumnKind::Numeric => {
                let is_text = matches!(series.dtype(), DataType::String);
                if nulls == 0 && (!is_text || series.is_empty()) {
                    columns.push(col.clone());
                    continue;
                }

                let values = numeric_values(series)?;
                if nulls == 0 {
                    columns.push(values.into_series().into_column());
                    continue;
                }

                let Some(mean) = values.mean() else {
                    tracing::warn!(column = %name, "Column has no values; mean is undefined, leaving it unfilled");
                    unfilled_columns.push(name.to_string());
                    columns.push(col.clone());
                    continue;
                };

                let filled: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(mean)).collect();
                columns.push(Series::new(name, filled).into_column());
                filled_cells += nulls;
            }
        }
    }

    Ok(FillOutcome {
        table: DataFrame::new(columns)?,
        filled_cells,
        unfilled_columns,
    })
}
