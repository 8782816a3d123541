//! Statistical profiling for classified columns.
//!
//! These are the measurements the insight and warning generators share:
//! location/spread/quartiles for numeric columns and frequency counts for
//! categorical ones. Everything is computed over non-missing values only.
//!
//! Quartiles use linear interpolation between order statistics (the same
//! method as `numpy.quantile(..., method="linear")`) and the standard
//! deviation is the sample deviation (ddof = 1).

use super::classify::numeric_values;
use crate::error::Result;
use polars::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// `None` when fewer than two values are present.
    pub std_dev: Option<f64>,
    pub q1: f64,
    pub q3: f64,
    /// Whether the column's representation is an integer dtype.
    pub is_integer: bool,
    /// Exact extremes of an integer column; the float view rounds above 2^53.
    pub int_range: Option<(i64, i64)>,
}

impl NumericStats {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Profiles a numeric column. Returns `None` when the column has no values.
///
/// # Errors
///
/// Returns error if the column cannot be viewed as `Float64` or a quantile
/// cannot be computed.
pub fn numeric_stats(series: &Series) -> Result<Option<NumericStats>> {
    let ca = numeric_values(series)?;
    let is_integer = series.dtype().is_integer();
    let Some(mut stats) = numeric_stats_from(&ca, is_integer)? else {
        return Ok(None);
    };
    if is_integer {
        let ints = series.cast(&DataType::Int64)?;
        let ints = ints.i64()?;
        if ints.null_count() == series.null_count()
            && let (Some(lo), Some(hi)) = (ints.min(), ints.max())
        {
            stats.int_range = Some((lo, hi));
        }
    }
    Ok(Some(stats))
}

/// Same as [`numeric_stats`] over an already-materialised float view.
///
/// # Errors
///
/// Returns error if a quantile cannot be computed.
pub fn numeric_stats_from(ca: &Float64Chunked, is_integer: bool) -> Result<Option<NumericStats>> {
    let (Some(min), Some(max), Some(mean), Some(median)) = (ca.min(), ca.max(), ca.mean(), ca.median())
    else {
        return Ok(None);
    };
    let (Some(q1), Some(q3)) = (
        ca.quantile(0.25, QuantileMethod::Linear)?,
        ca.quantile(0.75, QuantileMethod::Linear)?,
    ) else {
        return Ok(None);
    };
    let std_dev = ca.std(1).filter(|s| s.is_finite());

    Ok(Some(NumericStats {
        min,
        max,
        mean,
        median,
        std_dev,
        q1,
        q3,
        is_integer,
        int_range: None,
    }))
}

/// Counts values strictly outside `[q1 - k*IQR, q3 + k*IQR]`.
pub fn count_outliers(ca: &Float64Chunked, stats: &NumericStats, multiplier: f64) -> usize {
    let iqr = stats.iqr();
    let lower = stats.q1 - multiplier * iqr;
    let upper = stats.q3 + multiplier * iqr;
    ca.into_iter()
        .flatten()
        .filter(|&v| v < lower || v > upper)
        .count()
}

/// Number of distinct non-missing values.
///
/// # Errors
///
/// Returns error if Polars cannot hash the column.
pub fn distinct_count(series: &Series) -> Result<usize> {
    Ok(series.drop_nulls().n_unique()?)
}

/// Most frequent non-missing value rendered as text.
///
/// Ties go to the value that appears first in row order.
///
/// # Errors
///
/// Returns error if the column cannot be cast to strings.
pub fn most_frequent(series: &Series) -> Result<Option<String>> {
    let text = series.cast(&DataType::String)?;
    let ca = text.str()?;

    // value -> (first row seen, occurrences)
    let mut freq: HashMap<&str, (usize, usize)> = HashMap::new();
    for (row, value) in ca.into_iter().enumerate() {
        if let Some(v) = value {
            freq.entry(v).or_insert((row, 0)).1 += 1;
        }
    }

    let top = freq
        .into_iter()
        .max_by(|(_, (row_a, count_a)), (_, (row_b, count_b))| {
            count_a.cmp(count_b).then_with(|| row_b.cmp(row_a))
        })
        .map(|(value, _)| value.to_owned());
    Ok(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(name: &str, values: &[f64]) -> Series {
        Series::new(name.into(), values)
    }

    #[test]
    fn test_quartiles_use_linear_interpolation() -> anyhow::Result<()> {
        let s = floats("v", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
        let stats = numeric_stats(&s)?.expect("column has values");
        assert!((stats.q1 - 2.25).abs() < 1e-9, "q1 was {}", stats.q1);
        assert!((stats.q3 - 4.75).abs() < 1e-9, "q3 was {}", stats.q3);
        assert!((stats.iqr() - 2.5).abs() < 1e-9);
        assert!((stats.median - 3.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_outlier_count() -> anyhow::Result<()> {
        let s = floats("v", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
        let ca = numeric_values(&s)?;
        let stats = numeric_stats_from(&ca, false)?.expect("column has values");
        assert_eq!(count_outliers(&ca, &stats, 1.5), 1);

        let s = floats("v", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let ca = numeric_values(&s)?;
        let stats = numeric_stats_from(&ca, false)?.expect("column has values");
        assert_eq!(count_outliers(&ca, &stats, 1.5), 0);
        Ok(())
    }

    #[test]
    fn test_empty_column_has_no_stats() -> anyhow::Result<()> {
        let s = Series::new("v".into(), vec![None::<f64>, None]);
        assert!(numeric_stats(&s)?.is_none());
        Ok(())
    }

    #[test]
    fn test_single_value_has_no_std_dev() -> anyhow::Result<()> {
        let s = floats("v", &[7.0]);
        let stats = numeric_stats(&s)?.expect("column has values");
        assert!(stats.std_dev.is_none_or(|s| s == 0.0));
        Ok(())
    }

    #[test]
    fn test_most_frequent_tie_breaks_on_first_occurrence() -> anyhow::Result<()> {
        let s = Series::new("city".into(), vec!["MEL", "SYD", "SYD", "MEL", "PER"]);
        assert_eq!(most_frequent(&s)?.as_deref(), Some("MEL"));

        let s = Series::new("city".into(), vec!["PER", "SYD", "SYD", "MEL"]);
        assert_eq!(most_frequent(&s)?.as_deref(), Some("SYD"));
        Ok(())
    }

    #[test]
    fn test_most_frequent_ignores_missing() -> anyhow::Result<()> {
        let s = Series::new("city".into(), vec![None, None, Some("SYD")]);
        assert_eq!(most_frequent(&s)?.as_deref(), Some("SYD"));

        let s = Series::new("city".into(), vec![None::<&str>, None]);
        assert_eq!(most_frequent(&s)?, None);
        Ok(())
    }

    #[test]
    fn test_distinct_count_excludes_missing() -> anyhow::Result<()> {
        let s = Series::new("c".into(), vec![Some("a"), None, Some("b"), Some("a")]);
        assert_eq!(distinct_count(&s)?, 2);
        Ok(())
    }

    #[test]
    fn test_integer_range_is_exact() -> anyhow::Result<()> {
        let s = Series::new("id".into(), vec![Some(-9_007_199_254_740_993i64), None, Some(3)]);
        let stats = numeric_stats(&s)?.expect("column has values");
        assert_eq!(stats.int_range, Some((-9_007_199_254_740_993, 3)));

        let s = floats("v", &[1.0, 2.0]);
        assert_eq!(numeric_stats(&s)?.expect("column has values").int_range, None);
        Ok(())
    }
}
