//! Restores integer representation after cleaning.
//!
//! Mean imputation widens integer columns to `Float64`. A numeric column whose
//! values are all whole numbers is turned back into `Int64`, which keeps
//! missing cells as nulls. Numeric text with fractional values becomes
//! `Float64`.

use super::classify::{classify_series, numeric_values};
use super::types::ColumnKind;
use crate::error::Result;
use polars::prelude::*;

/// Largest magnitude that converts to `i64` without saturating.
const I64_SAFE_BOUND: f64 = i64::MAX as f64;

fn is_whole(v: f64) -> bool {
    v % 1.0 == 0.0 && v.abs() < I64_SAFE_BOUND
}

/// Converts integral numeric columns to `Int64`. Applying it twice gives the
/// same table as applying it once.
///
/// # Errors
///
/// Returns error if Polars fails to cast or rebuild a column.
pub fn restore_integer_columns(df: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(df.width());
    let mut restored = 0usize;

    for col in df.get_columns() {
        let series = col.as_materialized_series();
        if series.dtype().is_integer() || classify_series(series) != ColumnKind::Numeric {
            columns.push(col.clone());
            continue;
        }

        let values = numeric_values(series)?;
        let mut present = (&values).into_iter().flatten().peekable();
        if present.peek().is_none() {
            columns.push(col.clone());
            continue;
        }

        if present.all(is_whole) {
            let ints: Vec<Option<i64>> = (&values)
                .into_iter()
                .map(|v| v.map(|f| f as i64))
                .collect();
            columns.push(Series::new(series.name().clone(), ints).into_column());
            restored += 1;
        } else if matches!(series.dtype(), DataType::String) {
            // Numeric text with fractions is kept as floating point.
            drop(present);
            columns.push(values.into_series().into_column());
        } else {
            columns.push(col.clone());
        }
    }

    tracing::debug!(restored, "Restored integer columns");
    Ok(DataFrame::new(columns)?)
}
