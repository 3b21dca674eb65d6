//! Valuation System - Deterministic equity valuation projection engine
//!
//! This library provides:
//! - Compounding future-value projections over an inclusive year range
//! - Scenario analysis (optimistic / base / conservative presets, or a
//!   factor derived from weighted external signals)
//! - An oscillatory scoring heuristic with a pluggable expectation backend
//! - Snapshot loading from CSV watchlists

pub mod snapshot;
pub mod factors;
pub mod projection;
pub mod scoring;
pub mod scenario;

// Re-export commonly used types
pub use snapshot::FundamentalSnapshot;
pub use factors::{ExternalFactorBundle, SentimentSignal};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionRow, ProjectionTable};
pub use scoring::{oscillatory_score, OscillatoryScorer, TrigBackend};
pub use scenario::{AdjustmentFactor, Scenario, ScenarioRunner};
