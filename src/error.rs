//! Centralized error handling for quickinsight.
//!
//! The analysis engine is total over well-formed tables, so most of these
//! variants surface from the edges: reading a request file, a bad chart-type
//! override from the caller, or Polars reporting a failed cast.
//!
//! ```
//! use quickinsight::error::QuickInsightError;
//!
//! fn describe(err: &QuickInsightError) -> String {
//!     match err {
//!         QuickInsightError::InvalidChartType(tag) => format!("unknown chart '{tag}'"),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! Results can be annotated with [`ResultExt::context`]:
//!
//! ```no_run
//! use quickinsight::error::ResultExt as _;
//!
//! fn load() -> quickinsight::error::Result<String> {
//!     let raw = std::fs::read_to_string("request.json").context("Failed to read request")?;
//!     Ok(raw)
//! }
//! ```

use std::fmt;

/// Main error type for quickinsight operations.
#[derive(Debug)]
pub enum QuickInsightError {
    /// I/O errors (request files, CSV import/export)
    Io(std::io::Error),

    /// Data processing errors raised by Polars
    DataProcessing(String),

    /// Malformed analysis request / configuration
    Config(String),

    /// A chart-type override outside the supported set
    InvalidChartType(String),

    /// A referenced column is not part of the table
    UnknownColumn(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for QuickInsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidChartType(tag) => write!(f, "Invalid chart type: {tag}"),
            Self::UnknownColumn(name) => write!(f, "Unknown column: {name}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for QuickInsightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuickInsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for QuickInsightError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for QuickInsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for QuickInsightError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for quickinsight operations.
pub type Result<T> = std::result::Result<T, QuickInsightError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in [`QuickInsightError::Other`].
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in [`QuickInsightError::Other`].
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<QuickInsightError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: QuickInsightError = e.into();
            QuickInsightError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: QuickInsightError = e.into();
            QuickInsightError::Other(format!("{}: {}", f(), err))
        })
    }
}
