//! Column classification into numeric and categorical kinds.
//!
//! Classification is recomputed from the values every time it is needed and
//! never cached alongside the table. Missing cells are ignored, so a column
//! with no values at all is vacuously numeric.

use super::types::{ColumnKind, ColumnSets};
use crate::error::Result;
use polars::prelude::*;

/// Parses a string cell as a number, tolerating surrounding whitespace.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn classify_series(series: &Series) -> ColumnKind {
    let dtype = series.dtype();
    if dtype.is_primitive_numeric() || matches!(dtype, DataType::Null) {
        return ColumnKind::Numeric;
    }

    if let Ok(ca) = series.str() {
        let all_numbers = ca.into_iter().flatten().all(|v| parse_number(v).is_some());
        if all_numbers {
            return ColumnKind::Numeric;
        }
        return ColumnKind::Categorical;
    }

    // Boolean, temporal and nested values are not numbers.
    if series.null_count() == series.len() {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

pub fn classify_columns(df: &DataFrame) -> ColumnSets {
    let mut sets = ColumnSets::default();
    for col in df.get_columns() {
        let name = col.name().to_string();
        match classify_series(col.as_materialized_series()) {
            ColumnKind::Numeric => sets.numeric.push(name),
            ColumnKind::Categorical => sets.categorical.push(name),
        }
    }
    tracing::debug!(
        numeric = sets.numeric.len(),
        categorical = sets.categorical.len(),
        "Classified columns"
    );
    sets
}

/// Float view of a numeric column with nulls preserved.
///
/// # Errors
///
/// Returns error if the column cannot be cast to `Float64`.
pub fn numeric_values(series: &Series) -> Result<Float64Chunked> {
    let floats = if let Ok(ca) = series.str() {
        let parsed: Vec<Option<f64>> = ca
            .into_iter()
            .map(|v| v.and_then(parse_number))
            .collect();
        Series::new(series.name().clone(), parsed)
    } else {
        series.cast(&DataType::Float64)?
    };
    Ok(floats.f64()?.clone())
}
