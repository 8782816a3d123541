pub mod analysis;
pub mod charts;
pub mod classify;
pub mod cleaning;
pub mod health;
pub mod interpretation;
pub mod io;
pub mod normalise;
pub mod profiling;
pub mod types;

pub use analysis::{preview_rows, run_full_analysis};
pub use charts::{recommend_chart, resolve_chart};
pub use classify::{classify_columns, classify_series};
pub use cleaning::{clean_df, fill_missing, remove_duplicates};
pub use health::detect_data_warnings;
pub use interpretation::{generate_insights, missing_value_count};
pub use io::{load_df, save_df};
pub use normalise::restore_integer_columns;
pub use types::{
    AnalysisReport, ChartSpec, ChartType, CleaningOptions, CleaningReport, ColumnKind, ColumnSets,
    FillOutcome,
};
