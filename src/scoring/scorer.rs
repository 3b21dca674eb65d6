//! Oscillatory score computation
//!
//! Maps bounded valuation inputs (and optional external factors) to a
//! single indicator in [-1, 1]. This is a deliberately arbitrary heuristic,
//! not a physical model: inputs are clamped, normalized onto fractions of
//! pi, summed into a rotation angle, and handed to an expectation backend.
//! The external-term weights (0.2 / 0.3 / 0.5) are calibration constants
//! from the original author, preserved as-is.

use super::backend::{ExpectationBackend, TrigBackend};

use std::f64::consts::PI;

/// Optional external factors for the scoring angle.
///
/// Defaults are all zero, which makes the external term vanish — the
/// two-argument scoring form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalTerms {
    /// Inflation percent, clamped to [-10, 10]
    pub inflation_pct: f64,

    /// Interest rate percent, clamped to [0, 10]
    pub interest_rate_pct: f64,

    /// Market sentiment, clamped to [-1, 1]
    pub sentiment: f64,
}

impl ExternalTerms {
    /// Weighted external contribution in units of pi.
    ///
    /// Inflation normalizes to [-1, 1], interest to [0, 1], sentiment is
    /// already [-1, 1] after clamping.
    fn weighted(&self) -> f64 {
        let inflation_norm = self.inflation_pct.clamp(-10.0, 10.0) / 10.0;
        let interest_norm = self.interest_rate_pct.clamp(0.0, 10.0) / 10.0;
        let sentiment_norm = self.sentiment.clamp(-1.0, 1.0);
        0.2 * inflation_norm + 0.3 * interest_norm + 0.5 * sentiment_norm
    }
}

/// Rotation angle from clamped, normalized inputs.
///
/// P/E clamps to [0, 100] and EPS to [0, 10]; each maps onto [0, pi].
/// Out-of-bound inputs are silently clamped, never rejected.
fn theta(price_to_earnings: f64, eps: f64, externals: &ExternalTerms) -> f64 {
    let per_term = price_to_earnings.clamp(0.0, 100.0) / 100.0 * PI;
    let eps_term = eps.clamp(0.0, 10.0) / 10.0 * PI;
    per_term + eps_term + externals.weighted() * PI
}

/// Qualitative reading of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Positive,
    Cautious,
}

impl Outlook {
    /// Positive scores read as a positive outlook, everything else as
    /// caution
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Outlook::Positive
        } else {
            Outlook::Cautious
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outlook::Positive => "positive",
            Outlook::Cautious => "cautious",
        }
    }
}

/// Oscillatory scorer over a chosen expectation backend.
///
/// All angle preparation is identical regardless of backend; only the final
/// expectation evaluation is delegated.
pub struct OscillatoryScorer<B: ExpectationBackend = TrigBackend> {
    backend: B,
}

impl Default for OscillatoryScorer<TrigBackend> {
    fn default() -> Self {
        Self::new(TrigBackend)
    }
}

impl<B: ExpectationBackend> OscillatoryScorer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Two-argument form: external term omitted entirely
    pub fn score(&self, price_to_earnings: f64, eps: f64) -> f64 {
        self.score_with_externals(price_to_earnings, eps, &ExternalTerms::default())
    }

    /// Full form with external factor contributions
    pub fn score_with_externals(
        &self,
        price_to_earnings: f64,
        eps: f64,
        externals: &ExternalTerms,
    ) -> f64 {
        self.backend.expectation(theta(price_to_earnings, eps, externals))
    }
}

/// Score with the default trigonometric backend.
pub fn oscillatory_score(price_to_earnings: f64, eps: f64, externals: &ExternalTerms) -> f64 {
    OscillatoryScorer::default().score_with_externals(price_to_earnings, eps, externals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_score_in_unit_interval() {
        let scorer = OscillatoryScorer::default();
        for pe in [0.0, 12.5, 50.0, 100.0, 500.0] {
            for eps in [-3.0, 0.0, 5.0, 10.0, 42.0] {
                let score = scorer.score(pe, eps);
                assert!((-1.0..=1.0).contains(&score), "score {} out of range", score);
            }
        }
    }

    #[test]
    fn test_two_argument_form_omits_externals() {
        let scorer = OscillatoryScorer::default();
        let zeroed = ExternalTerms::default();
        assert_eq!(
            scorer.score(50.0, 5.0).to_bits(),
            scorer.score_with_externals(50.0, 5.0, &zeroed).to_bits()
        );
    }

    #[test]
    fn test_known_value() {
        // PE 50, EPS 5, no externals: theta = pi/2 + pi/2 = pi, sin(pi) ~ 0
        let score = oscillatory_score(50.0, 5.0, &ExternalTerms::default());
        assert_abs_diff_eq!(score, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_inputs_clamped() {
        let scorer = OscillatoryScorer::default();
        assert_eq!(
            scorer.score(500.0, 5.0).to_bits(),
            scorer.score(100.0, 5.0).to_bits()
        );
        assert_eq!(
            scorer.score(50.0, -7.0).to_bits(),
            scorer.score(50.0, 0.0).to_bits()
        );

        let hot = ExternalTerms {
            inflation_pct: 99.0,
            interest_rate_pct: -4.0,
            sentiment: 2.5,
        };
        let clamped = ExternalTerms {
            inflation_pct: 10.0,
            interest_rate_pct: 0.0,
            sentiment: 1.0,
        };
        assert_eq!(
            scorer.score_with_externals(20.0, 3.0, &hot).to_bits(),
            scorer.score_with_externals(20.0, 3.0, &clamped).to_bits()
        );
    }

    #[test]
    fn test_deterministic_across_calls() {
        let scorer = OscillatoryScorer::default();
        let externals = ExternalTerms {
            inflation_pct: 2.0,
            interest_rate_pct: 2.0,
            sentiment: 0.0,
        };
        let first = scorer.score_with_externals(31.4, 6.2, &externals);
        let second = scorer.score_with_externals(31.4, 6.2, &externals);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_custom_backend_substitutes() {
        // A backend that always reports full alignment, standing in for a
        // hardware-measured expectation value
        struct PinnedBackend;
        impl ExpectationBackend for PinnedBackend {
            fn expectation(&self, _theta: f64) -> f64 {
                1.0
            }
            fn name(&self) -> &'static str {
                "pinned"
            }
        }

        let scorer = OscillatoryScorer::new(PinnedBackend);
        assert_relative_eq!(scorer.score(50.0, 5.0), 1.0);
        assert_eq!(scorer.backend_name(), "pinned");
    }

    #[test]
    fn test_outlook_reading() {
        assert_eq!(Outlook::from_score(0.4), Outlook::Positive);
        assert_eq!(Outlook::from_score(0.0), Outlook::Cautious);
        assert_eq!(Outlook::from_score(-0.7), Outlook::Cautious);
    }
}
