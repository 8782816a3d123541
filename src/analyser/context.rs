//! Caller-owned analysis state.
//!
//! The engine functions are stateless. Applications that want a "current
//! dataset" across several interactions keep an [`AnalysisContext`] and
//! thread it through explicitly.

use super::logic::cleaning::clean_df;
use super::logic::normalise::restore_integer_columns;
use super::logic::types::{ChartSpec, CleaningOptions, CleaningReport};
use crate::error::Result;
use polars::prelude::DataFrame;

#[derive(Clone, Debug)]
pub struct AnalysisContext {
    original: DataFrame,
    cleaned: Option<DataFrame>,
    charts: Vec<ChartSpec>,
}

impl AnalysisContext {
    pub fn new(original: DataFrame) -> Self {
        Self {
            original,
            cleaned: None,
            charts: Vec::new(),
        }
    }

    pub fn original(&self) -> &DataFrame {
        &self.original
    }

    /// The cleaned table when one exists, else the original.
    pub fn current(&self) -> &DataFrame {
        self.cleaned.as_ref().unwrap_or(&self.original)
    }

    pub fn is_cleaned(&self) -> bool {
        self.cleaned.is_some()
    }

    /// Cleans the current table and makes the result current. Successive
    /// calls build on each other.
    ///
    /// # Errors
    ///
    /// Returns error if cleaning or integer restoration fails; the context
    /// is left unchanged in that case.
    pub fn apply_cleaning(&mut self, options: &CleaningOptions) -> Result<CleaningReport> {
        let mut report = clean_df(self.current(), options)?;
        report.table = restore_integer_columns(&report.table)?;
        self.cleaned = Some(report.table.clone());
        Ok(report)
    }

    pub fn record_chart(&mut self, chart: ChartSpec) {
        self.charts.push(chart);
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    /// Picks recorded charts by index, in the order given. Entries that are
    /// not plain digit strings or are out of range are skipped.
    pub fn select_charts(&self, indexes: &[String]) -> Vec<&ChartSpec> {
        indexes
            .iter()
            .filter(|raw| !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()))
            .filter_map(|raw| raw.parse::<usize>().ok())
            .filter_map(|idx| self.charts.get(idx))
            .collect()
    }

    /// Forgets the cleaned table and recorded charts.
    pub fn reset(&mut self) {
        self.cleaned = None;
        self.charts.clear();
    }
}
