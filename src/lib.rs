//! # quickinsight - Automatic Insights for Tabular Data
//!
//! quickinsight takes a table already loaded into a Polars [`DataFrame`] and
//! produces plain-language observations about it: a short list of insights,
//! data-quality warnings and a recommended chart for a metric/dimension pair.
//! It can also clean the table by dropping duplicate rows and filling gaps.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quickinsight::analyser::logic::{load_df, run_full_analysis};
//! use quickinsight::config::AnalysisRequest;
//!
//! # fn example() -> anyhow::Result<()> {
//! let df = load_df("sales.csv".as_ref())?;
//! let request = AnalysisRequest {
//!     fill_missing: true,
//!     metric: Some("sales".to_owned()),
//!     dimension: Some("region".to_owned()),
//!     ..AnalysisRequest::default()
//! };
//! let report = run_full_analysis(&df, &request)?;
//! for insight in &report.insights {
//!     println!("{insight}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser`]: Analysis engine and caller-owned session state
//!   - [`analyser::logic`]: Classification, cleaning, insights, warnings and charts
//! - [`config`]: Per-request analysis settings
//! - [`error`]: Error types and handling utilities
//! - [`logging`]: `tracing` subscriber setup for the binary
//!
//! ## Key Concepts
//!
//! ### Snapshots, not mutation
//!
//! Every engine function takes `&DataFrame` and returns new values. Cleaning
//! yields a new table; the input is left as it was. Column kinds are worked
//! out from the values each time and never stored next to the table.
//!
//! ### Missing values
//!
//! A Polars null is the one missing marker. An empty string is a value.
//!
//! [`DataFrame`]: polars::prelude::DataFrame

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
