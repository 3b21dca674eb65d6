//! Oscillatory scoring heuristic with pluggable expectation backends

mod backend;
mod scorer;

pub use backend::{ExpectationBackend, TrigBackend};
pub use scorer::{oscillatory_score, ExternalTerms, OscillatoryScorer, Outlook};
