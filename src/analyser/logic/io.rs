//! CSV loading and saving for the command-line front end.
//!
//! The analysis engine itself never touches files; these helpers play the
//! part of the external loader and of the "download cleaned CSV" step.

use anyhow::{Context as _, Result};
use polars::prelude::*;
use std::path::Path;

/// # Errors
///
/// Returns error for non-CSV paths or unreadable files.
pub fn load_df(path: &Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    if ext != "csv" {
        return Err(anyhow::anyhow!("Unsupported file extension: {ext}"));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_has_header(true)
        .finish()?
        .collect()
        .with_context(|| format!("Failed to read CSV {}", path.display()))?;

    tracing::info!(rows = df.height(), cols = df.width(), "Loaded {}", path.display());
    Ok(df)
}

/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn save_df(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .context("Failed to write CSV file")?;
    Ok(())
}
