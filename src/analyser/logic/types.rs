use crate::error::QuickInsightError;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Debug)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
        }
    }
}

/// Column names split by kind, each list in table column order.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ColumnSets {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnSets {
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        if self.numeric.iter().any(|c| c == name) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.iter().any(|c| c == name) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.kind_of(name) == Some(ColumnKind::Numeric)
    }

    pub fn is_categorical(&self, name: &str) -> bool {
        self.kind_of(name) == Some(ColumnKind::Categorical)
    }
}

/// Chart types a caller may render. Recommendations only ever use
/// histogram, line, pie, bar and scatter; area and box are override-only.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Histogram,
    Pie,
    #[serde(rename = "box")]
    BoxPlot,
    Scatter,
}

impl ChartType {
    pub const ALL: [Self; 7] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Histogram,
        Self::Pie,
        Self::BoxPlot,
        Self::Scatter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Histogram => "histogram",
            Self::Pie => "pie",
            Self::BoxPlot => "box",
            Self::Scatter => "scatter",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = QuickInsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| QuickInsightError::InvalidChartType(s.to_owned()))
    }
}

/// A chart the caller may hand to a plotting library. Nothing is rendered here.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ChartSpec {
    pub title: String,
    pub chart_type: ChartType,
    pub metric: String,
    pub dimension: Option<String>,
}

impl ChartSpec {
    pub fn new(chart_type: ChartType, metric: &str, dimension: Option<&str>) -> Self {
        let title = match dimension {
            Some(dim) => format!("{metric} by {dim}"),
            None => metric.to_owned(),
        };
        Self {
            title,
            chart_type,
            metric: metric.to_owned(),
            dimension: dimension.map(str::to_owned),
        }
    }
}

#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CleaningOptions {
    pub remove_duplicates: bool,
    pub fill_missing: bool,
}

impl CleaningOptions {
    pub fn is_noop(&self) -> bool {
        !self.remove_duplicates && !self.fill_missing
    }
}

/// Result of [`fill_missing`](super::cleaning::fill_missing).
#[derive(Clone, Debug)]
pub struct FillOutcome {
    pub table: DataFrame,
    pub filled_cells: usize,
    /// Numeric columns with no values at all; their mean is undefined so they are left as-is.
    pub unfilled_columns: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct CleaningReport {
    pub table: DataFrame,
    pub duplicates_removed: usize,
    pub filled_cells: usize,
    pub unfilled_columns: Vec<String>,
}

#[derive(Clone, Serialize, Debug)]
pub struct AnalysisReport {
    pub total_rows: usize,
    pub total_cols: usize,
    pub missing_values: usize,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub insights: Vec<String>,
    pub warnings: Vec<String>,
    pub chart: Option<ChartSpec>,
    pub preview: Vec<Vec<String>>,
    pub duplicates_removed: usize,
    pub unfilled_columns: Vec<String>,
    #[serde(skip)]
    pub table: DataFrame,
}
