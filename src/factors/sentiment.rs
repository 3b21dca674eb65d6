//! Sentiment aggregation over classified text signals
//!
//! A text-sentiment collaborator classifies each snippet as positive or
//! negative and reports its own confidence in that label. The aggregate
//! score is the mean of signed confidences.

use serde::{Deserialize, Serialize};

/// Classifier output label for one text snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// One classified text signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSignal {
    pub label: SentimentLabel,

    /// Classifier's reported probability of its own label, in [0, 1]
    pub confidence: f64,
}

impl SentimentSignal {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Signed contribution: +confidence if positive, -confidence otherwise
    pub fn signed(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.confidence,
            SentimentLabel::Negative => -self.confidence,
        }
    }
}

/// Mean signed confidence over a batch of signals, in [-1, 1].
///
/// An empty batch is neutral (0.0), not an error: a news collaborator that
/// finds no headlines simply contributes nothing.
pub fn aggregate_score(signals: &[SentimentSignal]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }
    let sum: f64 = signals.iter().map(SentimentSignal::signed).sum();
    sum / signals.len() as f64
}
