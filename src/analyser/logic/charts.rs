//! Chart-type recommendation for a metric/dimension pair.
//!
//! Rules are evaluated top-down and the first match wins:
//!
//! | metric  | dimension   | extra                         | result    |
//! |---------|-------------|-------------------------------|-----------|
//! | numeric | -           |                               | histogram |
//! | numeric | categorical | name has a time keyword       | line      |
//! | numeric | categorical | at most 10 distinct values    | pie       |
//! | numeric | categorical |                               | bar       |
//! | numeric | numeric     |                               | scatter   |
//!
//! Anything else yields `None`; the caller decides what to do about it.

use super::profiling::distinct_count;
use super::types::{ChartSpec, ChartType, ColumnSets};
use crate::config::AnalysisRequest;
use crate::error::{QuickInsightError, Result};
use polars::prelude::*;

/// Substrings (matched case-insensitively) marking a dimension as time-like.
pub const TIME_KEYWORDS: [&str; 4] = ["year", "date", "month", "time"];
/// Categorical dimensions with at most this many distinct values get a pie chart.
pub const PIE_MAX_CATEGORIES: usize = 10;

fn present(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

pub fn is_time_like(dimension: &str) -> bool {
    let lower = dimension.to_lowercase();
    TIME_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Recommends a chart type, or `None` when no rule applies.
///
/// `table` is only consulted for the pie rule; without it a categorical
/// dimension that is not time-like falls through to a bar chart.
///
/// # Errors
///
/// Returns error if the dimension column cannot be read from `table`.
pub fn recommend_chart(
    metric: Option<&str>,
    dimension: Option<&str>,
    columns: &ColumnSets,
    table: Option<&DataFrame>,
) -> Result<Option<ChartType>> {
    let Some(metric) = present(metric) else {
        return Ok(None);
    };
    if !columns.is_numeric(metric) {
        return Ok(None);
    }

    let Some(dimension) = present(dimension) else {
        return Ok(Some(ChartType::Histogram));
    };

    if columns.is_categorical(dimension) {
        if is_time_like(dimension) {
            return Ok(Some(ChartType::Line));
        }
        if let Some(df) = table {
            let Ok(column) = df.column(dimension) else {
                return Err(QuickInsightError::UnknownColumn(dimension.to_owned()));
            };
            if distinct_count(column.as_materialized_series())? <= PIE_MAX_CATEGORIES {
                return Ok(Some(ChartType::Pie));
            }
        }
        return Ok(Some(ChartType::Bar));
    }

    if columns.is_numeric(dimension) {
        return Ok(Some(ChartType::Scatter));
    }

    Ok(None)
}

/// Works out the chart to draw for a request.
///
/// An explicit `chart_type` override wins over the recommendation. A spec
/// is only returned when both a chart type and a metric are known and there
/// is either a dimension or the chart is a histogram.
///
/// # Errors
///
/// Returns [`QuickInsightError::InvalidChartType`] for an unsupported
/// override, or any error from [`recommend_chart`].
pub fn resolve_chart(
    request: &AnalysisRequest,
    columns: &ColumnSets,
    table: &DataFrame,
) -> Result<Option<ChartSpec>> {
    let metric = present(request.metric.as_deref());
    let dimension = present(request.dimension.as_deref());

    let chart_type = match present(request.chart_type.as_deref()) {
        Some(tag) => Some(tag.parse::<ChartType>()?),
        None if metric.is_some() => recommend_chart(metric, dimension, columns, Some(table))?,
        None => None,
    };

    let spec = match (chart_type, metric) {
        (Some(chart_type), Some(metric))
            if dimension.is_some() || chart_type == ChartType::Histogram =>
        {
            Some(ChartSpec::new(chart_type, metric, dimension))
        }
        _ => None,
    };

    if let Some(spec) = &spec {
        tracing::debug!(chart = %spec.chart_type, title = %spec.title, "Resolved chart");
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_keywords_are_case_insensitive() {
        assert!(is_time_like("Year"));
        assert!(is_time_like("order_DATE"));
        assert!(is_time_like("timestamp"));
        assert!(!is_time_like("region"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() -> anyhow::Result<()> {
        let columns = ColumnSets {
            numeric: vec!["sales".to_owned()],
            categorical: vec![],
        };
        assert_eq!(
            recommend_chart(Some("sales"), Some(""), &columns, None)?,
            Some(ChartType::Histogram)
        );
        assert_eq!(recommend_chart(Some(""), None, &columns, None)?, None);
        Ok(())
    }
}
