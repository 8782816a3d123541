use super::classify::{classify_columns, numeric_values};
use super::profiling::{count_outliers, distinct_count, numeric_stats_from};
use crate::error::Result;
use polars::prelude::*;

/// Tukey fence multiplier for the outlier rule.
pub const IQR_MULTIPLIER: f64 = 1.5;
/// Categorical columns with more distinct values than this are flagged.
pub const HIGH_CARDINALITY_THRESHOLD: usize = 15;

/// Flags statistical anomalies.
///
/// Numeric columns come first in column order (outliers, then skew for each
/// column), followed by categorical cardinality warnings in column order.
///
/// # Errors
///
/// Returns error if a column cannot be profiled.
pub fn detect_data_warnings(df: &DataFrame) -> Result<Vec<String>> {
    let mut warnings = Vec::new();
    let sets = classify_columns(df);

    for name in &sets.numeric {
        let series = df.column(name)?.as_materialized_series();
        let ca = numeric_values(series)?;
        let Some(stats) = numeric_stats_from(&ca, series.dtype().is_integer())? else {
            continue;
        };

        let outliers = count_outliers(&ca, &stats, IQR_MULTIPLIER);
        if outliers > 0 {
            warnings.push(format!(
                "Column '{name}' contains {outliers} potential outliers."
            ));
        }

        if is_skewed(stats.mean, stats.median, stats.std_dev) {
            warnings.push(format!("Column '{name}' appears to be skewed."));
        }
    }

    for name in &sets.categorical {
        let series = df.column(name)?.as_materialized_series();
        let unique_count = distinct_count(series)?;
        if unique_count > HIGH_CARDINALITY_THRESHOLD {
            warnings.push(format!(
                "Column '{name}' has high cardinality ({unique_count} unique values)."
            ));
        }
    }

    tracing::debug!(count = warnings.len(), "Detected data warnings");
    Ok(warnings)
}

/// Mean/median gap larger than one standard deviation. Never fires for an
/// undefined or zero deviation.
pub fn is_skewed(mean: f64, median: f64, std_dev: Option<f64>) -> bool {
    match std_dev {
        Some(std) if std > 0.0 => (mean - median).abs() > std,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_guard() {
        assert!(!is_skewed(5.0, 5.0, Some(0.0)));
        assert!(!is_skewed(5.0, 1.0, Some(0.0)), "zero deviation never flags");
        assert!(!is_skewed(5.0, 1.0, None));
        assert!(is_skewed(10.0, 1.0, Some(2.0)));
        assert!(!is_skewed(2.0, 1.0, Some(2.0)));
    }
}
