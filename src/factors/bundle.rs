//! External macro and sentiment factor bundle
//!
//! Every field is independently optional. A macro-data provider that cannot
//! report a series leaves the field as `None`; downstream arithmetic must
//! treat absence as "unavailable", never as zero, so that a missing series
//! cannot silently bias a derived factor.

use serde::{Deserialize, Serialize};

/// Categorical political-stability level reported by a macro provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoliticalStability {
    Low,
    Medium,
    High,
}

impl PoliticalStability {
    /// Continuous stability score in [0, 1].
    ///
    /// The level-to-score mapping is a calibration choice preserved from the
    /// original model; treat the values as provisional tunables.
    pub fn score(&self) -> f64 {
        match self {
            PoliticalStability::Low => 0.25,
            PoliticalStability::Medium => 0.5,
            PoliticalStability::High => 0.85,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PoliticalStability::Low => "low",
            PoliticalStability::Medium => "medium",
            PoliticalStability::High => "high",
        }
    }
}

/// Named macro/sentiment signals for one country or market.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalFactorBundle {
    /// Annual inflation, percent
    pub inflation_pct: Option<f64>,

    /// Policy interest rate, percent
    pub interest_rate_pct: Option<f64>,

    /// Annual GDP growth, percent
    pub gdp_growth_pct: Option<f64>,

    /// Unemployment rate, percent
    pub unemployment_pct: Option<f64>,

    /// Household consumption growth, percent
    pub consumption_growth_pct: Option<f64>,

    /// Aggregated news sentiment in [-1, 1]
    pub news_sentiment: Option<f64>,

    /// Sector (technology) sentiment in [-1, 1]
    pub tech_sentiment: Option<f64>,

    /// Categorical political-stability level
    pub political_stability: Option<PoliticalStability>,
}

impl ExternalFactorBundle {
    /// Bundle with no signals available
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Blended sentiment in [-1, 1] from whatever signals are present.
    ///
    /// News and sector sentiment average directly; political stability maps
    /// its [0, 1] score onto [-1, 1]. Fields that are unavailable are left
    /// out of the mean entirely rather than counted as neutral. Returns
    /// `None` when no contributing signal is available.
    pub fn blended_sentiment(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0u32;

        for sentiment in [self.news_sentiment, self.tech_sentiment].into_iter().flatten() {
            sum += sentiment.clamp(-1.0, 1.0);
            count += 1;
        }
        if let Some(stability) = self.political_stability {
            sum += stability.score() * 2.0 - 1.0;
            count += 1;
        }

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stability_score_monotone() {
        assert!(PoliticalStability::Low.score() < PoliticalStability::Medium.score());
        assert!(PoliticalStability::Medium.score() < PoliticalStability::High.score());
    }

    #[test]
    fn test_blended_sentiment_skips_unavailable() {
        let bundle = ExternalFactorBundle {
            news_sentiment: Some(0.5),
            ..Default::default()
        };
        // Single available signal: mean is the signal itself
        assert_relative_eq!(bundle.blended_sentiment().unwrap(), 0.5);
    }

    #[test]
    fn test_blended_sentiment_with_stability() {
        let bundle = ExternalFactorBundle {
            news_sentiment: Some(0.5),
            political_stability: Some(PoliticalStability::Medium),
            ..Default::default()
        };
        // Medium stability maps to 0.0 on [-1, 1]
        assert_relative_eq!(bundle.blended_sentiment().unwrap(), 0.25);
    }

    #[test]
    fn test_blended_sentiment_all_unavailable() {
        assert!(ExternalFactorBundle::unavailable().blended_sentiment().is_none());
    }

    #[test]
    fn test_blended_sentiment_clamps_inputs() {
        let bundle = ExternalFactorBundle {
            news_sentiment: Some(5.0),
            ..Default::default()
        };
        assert_relative_eq!(bundle.blended_sentiment().unwrap(), 1.0);
    }
}
