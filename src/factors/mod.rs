//! External macro/sentiment factors feeding scenario derivation

mod bundle;
mod sentiment;

pub use bundle::{ExternalFactorBundle, PoliticalStability};
pub use sentiment::{aggregate_score, SentimentLabel, SentimentSignal};
