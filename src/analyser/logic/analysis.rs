use super::charts::resolve_chart;
use super::classify::classify_columns;
use super::cleaning::clean_df;
use super::health::detect_data_warnings;
use super::interpretation::{generate_insights, missing_value_count};
use super::normalise::restore_integer_columns;
use super::types::AnalysisReport;
use crate::config::AnalysisRequest;
use crate::error::{Result, ResultExt as _};
use polars::prelude::*;

/// Runs one analysis pass over a table snapshot.
///
/// Cleaning (when requested) produces a new table; the input is never
/// modified. Every later stage sees the same cleaned, integer-restored
/// snapshot.
///
/// # Errors
///
/// Returns error if the chart override is invalid or Polars fails on a
/// column operation.
pub fn run_full_analysis(df: &DataFrame, request: &AnalysisRequest) -> Result<AnalysisReport> {
    let options = request.cleaning_options();
    let (cleaned, duplicates_removed, unfilled_columns) = if options.is_noop() {
        (df.clone(), 0, Vec::new())
    } else {
        let report = clean_df(df, &options)?;
        (report.table, report.duplicates_removed, report.unfilled_columns)
    };

    let table = restore_integer_columns(&cleaned)?;
    let columns = classify_columns(&table);

    let insights = generate_insights(&table).context("Failed to generate insights")?;
    let warnings = detect_data_warnings(&table).context("Failed to detect data warnings")?;
    let chart = resolve_chart(request, &columns, &table)?;
    let preview = preview_rows(&table, request.preview_rows)?;

    tracing::info!(
        rows = table.height(),
        cols = table.width(),
        insights = insights.len(),
        warnings = warnings.len(),
        "Analysis complete"
    );

    Ok(AnalysisReport {
        total_rows: table.height(),
        total_cols: table.width(),
        missing_values: missing_value_count(&table),
        numeric_columns: columns.numeric,
        categorical_columns: columns.categorical,
        insights,
        warnings,
        chart,
        preview,
        duplicates_removed,
        unfilled_columns,
        table,
    })
}

/// First `n` rows rendered as text, row-major. Missing cells become "".
///
/// # Errors
///
/// Returns error if a column cannot be cast to strings.
pub fn preview_rows(df: &DataFrame, n: usize) -> Result<Vec<Vec<String>>> {
    let head = df.head(Some(n));
    let text = head
        .get_columns()
        .iter()
        .map(|c| c.as_materialized_series().cast(&DataType::String))
        .collect::<PolarsResult<Vec<_>>>()?;
    let cells = text
        .iter()
        .map(|s| s.str())
        .collect::<PolarsResult<Vec<_>>>()?;

    let rows = (0..head.height())
        .map(|row| {
            cells
                .iter()
                .map(|ca| ca.get(row).unwrap_or_default().to_owned())
                .collect()
        })
        .collect();
    Ok(rows)
}
