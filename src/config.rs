//! Per-request analysis settings.
//!
//! A request mirrors what the dashboard form used to post: cleaning switches,
//! the metric/dimension pair and an optional chart-type override. It can be
//! built in code, parsed from JSON, or assembled from CLI flags.
//!
//! ```
//! use quickinsight::config::AnalysisRequest;
//!
//! let request = AnalysisRequest::from_json_str(r#"{ "fill_missing": true, "metric": "sales" }"#)?;
//! assert!(request.fill_missing);
//! assert_eq!(request.preview_rows, 5);
//! # Ok::<(), quickinsight::error::QuickInsightError>(())
//! ```

use crate::analyser::logic::types::CleaningOptions;
use crate::error::{Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rows shown in the table preview unless the request says otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisRequest {
    pub remove_duplicates: bool,
    pub fill_missing: bool,
    pub metric: Option<String>,
    pub dimension: Option<String>,
    /// Explicit chart type; when unset one is recommended from the metric/dimension pair.
    pub chart_type: Option<String>,
    pub preview_rows: usize,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            remove_duplicates: false,
            fill_missing: false,
            metric: None,
            dimension: None,
            chart_type: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl AnalysisRequest {
    /// # Errors
    ///
    /// Returns [`crate::error::QuickInsightError::Config`] on malformed JSON.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not hold a valid request.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    pub fn cleaning_options(&self) -> CleaningOptions {
        CleaningOptions {
            remove_duplicates: self.remove_duplicates,
            fill_missing: self.fill_missing,
        }
    }
}
