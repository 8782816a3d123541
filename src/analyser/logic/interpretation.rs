use super::classify::classify_columns;
use super::profiling::{most_frequent, numeric_stats};
use crate::error::Result;
use polars::prelude::*;

/// Total number of missing cells across every column.
pub fn missing_value_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(Column::null_count).sum()
}

/// Renders a number the way the insight text expects: integers without a
/// fractional part, whole floats with one decimal, other floats in their
/// shortest round-trip form.
pub fn format_number(value: f64, is_integer: bool) -> String {
    if is_integer && value.is_finite() {
        format!("{value:.0}")
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Builds the descriptive statements for a table.
///
/// Order: dataset shape, missing-value summary, one statement per numeric
/// column, then one per categorical column, each group in column order.
/// Columns without any values are skipped.
///
/// # Errors
///
/// Returns error if a column cannot be profiled.
pub fn generate_insights(df: &DataFrame) -> Result<Vec<String>> {
    let mut insights = vec![format!(
        "The dataset contains {} rows and {} columns.",
        df.height(),
        df.width()
    )];

    let total_missing = missing_value_count(df);
    if total_missing == 0 {
        insights.push("There are no missing values after cleaning.".to_owned());
    } else {
        insights.push(format!("There are {total_missing} missing values remaining."));
    }

    let sets = classify_columns(df);

    for name in &sets.numeric {
        let series = df.column(name)?.as_materialized_series();
        if let Some(stats) = numeric_stats(series)? {
            let (min, max) = match stats.int_range {
                Some((lo, hi)) => (lo.to_string(), hi.to_string()),
                None => (
                    format_number(stats.min, stats.is_integer),
                    format_number(stats.max, stats.is_integer),
                ),
            };
            insights.push(format!(
                "'{name}' has an average of {:.2}, with values ranging from {min} to {max}.",
                stats.mean,
            ));
        }
    }

    for name in &sets.categorical {
        let series = df.column(name)?.as_materialized_series();
        if let Some(top) = most_frequent(series)? {
            insights.push(format!("The most frequent value in '{name}' is '{top}'."));
        }
    }

    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0, true), "3");
        assert_eq!(format_number(3.0, false), "3.0");
        assert_eq!(format_number(2.5, false), "2.5");
        assert_eq!(format_number(-0.125, false), "-0.125");
    }

    #[test]
    fn test_missing_value_count() -> anyhow::Result<()> {
        let df = DataFrame::new(vec![
            Column::from(Series::new("a".into(), vec![Some(1.0f64), None])),
            Column::from(Series::new("b".into(), vec![None::<&str>, None])),
        ])?;
        assert_eq!(missing_value_count(&df), 3);
        Ok(())
    }

    #[test]
    fn test_large_integers_print_exactly() -> anyhow::Result<()> {
        let df = DataFrame::new(vec![Column::from(Series::new(
            "id".into(),
            vec![1i64, 9_007_199_254_740_993],
        ))])?;
        let insights = generate_insights(&df)?;
        let line = insights.get(2).map(String::as_str).unwrap_or_default();
        assert!(
            line.ends_with("ranging from 1 to 9007199254740993."),
            "got {line}"
        );
        Ok(())
    }
}
