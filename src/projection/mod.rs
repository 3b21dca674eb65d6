//! Projection engine for future-value tables over a year range

mod engine;
mod table;

pub use engine::{project, ProjectionConfig, ProjectionEngine, BASE_YEAR, INTRINSIC_VALUE_RATIO};
pub use table::{ProjectionRow, ProjectionSummary, ProjectionTable};
