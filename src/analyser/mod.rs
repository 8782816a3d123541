pub mod context;
pub mod logic;

pub use context::AnalysisContext;
