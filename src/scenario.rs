//! Scenario selection and batch projection running
//!
//! A scenario supplies the per-year compounding factor the projection
//! engine applies. Three closed presets exist; a fourth path derives the
//! factor from a sentiment score blended out of external signals.

use crate::factors::{aggregate_score, ExternalFactorBundle, SentimentSignal};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionTable};
use crate::snapshot::FundamentalSnapshot;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Floor applied to every adjustment factor.
///
/// A strongly negative signal blend would otherwise collapse long-horizon
/// projections toward zero; the floor is a deliberate saturation. There is
/// no upside cap. Provisional calibration constant.
pub const FACTOR_FLOOR: f64 = 0.8;

/// How strongly a unit of sentiment moves the derived factor.
/// Provisional calibration constant.
pub const SENTIMENT_SENSITIVITY: f64 = 0.01;

/// Named projection scenario (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Optimistic,
    Base,
    Conservative,
}

impl Scenario {
    /// All presets, in display order
    pub const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Base, Scenario::Conservative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Optimistic => "optimistic",
            Scenario::Base => "base",
            Scenario::Conservative => "conservative",
        }
    }
}

/// Per-year compounding multiplier, floored at [`FACTOR_FLOOR`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFactor(f64);

impl AdjustmentFactor {
    /// Wrap a raw factor, clamping up to the floor. Never capped above.
    pub fn new(raw: f64) -> Self {
        Self(raw.max(FACTOR_FLOOR))
    }

    /// Preset factor for a named scenario
    pub fn preset(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Optimistic => Self(1.05),
            Scenario::Base => Self(1.02),
            Scenario::Conservative => Self(0.99),
        }
    }

    /// Derive a factor from a sentiment score in [-1, 1]:
    /// `max(base + sentiment * sensitivity, FACTOR_FLOOR)`
    pub fn derived(base: f64, sentiment_score: f64, sensitivity: f64) -> Self {
        Self::new(base + sentiment_score * sensitivity)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Runs projections across scenarios and snapshot batches.
///
/// Holds the projection config once so many runs share the same year range
/// without re-specifying it.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run one projection with an explicit factor and label
    pub fn run(
        &self,
        snapshot: &FundamentalSnapshot,
        factor: AdjustmentFactor,
        label: &str,
    ) -> ProjectionTable {
        let engine = ProjectionEngine::new(self.config.clone());
        engine.project_snapshot(snapshot, factor, label)
    }

    /// Run one projection for a named preset scenario
    pub fn run_preset(&self, snapshot: &FundamentalSnapshot, scenario: Scenario) -> ProjectionTable {
        self.run(snapshot, AdjustmentFactor::preset(scenario), scenario.as_str())
    }

    /// Run all three preset scenarios for one snapshot
    pub fn run_scenarios(&self, snapshot: &FundamentalSnapshot) -> Vec<ProjectionTable> {
        Scenario::ALL
            .iter()
            .map(|&scenario| self.run_preset(snapshot, scenario))
            .collect()
    }

    /// Run one projection with a factor derived from external signals.
    ///
    /// Classified text signals and the macro bundle's blended sentiment
    /// average together; when neither source has anything available the
    /// blend is neutral and the result equals the base scenario.
    pub fn run_derived(
        &self,
        snapshot: &FundamentalSnapshot,
        bundle: &ExternalFactorBundle,
        signals: &[SentimentSignal],
    ) -> ProjectionTable {
        let text_score = aggregate_score(signals);
        let sentiment = match bundle.blended_sentiment() {
            Some(macro_score) if signals.is_empty() => macro_score,
            Some(macro_score) => (macro_score + text_score) / 2.0,
            None => text_score,
        };

        let base = AdjustmentFactor::preset(Scenario::Base).value();
        let factor = AdjustmentFactor::derived(base, sentiment, SENTIMENT_SENSITIVITY);
        log::debug!(
            "derived factor {:.4} from sentiment {:.4} for {}",
            factor.value(),
            sentiment,
            snapshot.ticker
        );
        self.run(snapshot, factor, "derived")
    }

    /// Run the same factor across a batch of snapshots in parallel
    pub fn run_batch(
        &self,
        snapshots: &[FundamentalSnapshot],
        factor: AdjustmentFactor,
        label: &str,
    ) -> Vec<ProjectionTable> {
        snapshots
            .par_iter()
            .map(|snapshot| self.run(snapshot, factor, label))
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::SentimentLabel;
    use approx::assert_relative_eq;

    fn test_snapshot() -> FundamentalSnapshot {
        FundamentalSnapshot::new("AAPL", Some(100.0), Some(5.0))
    }

    #[test]
    fn test_preset_values() {
        assert_relative_eq!(AdjustmentFactor::preset(Scenario::Optimistic).value(), 1.05);
        assert_relative_eq!(AdjustmentFactor::preset(Scenario::Base).value(), 1.02);
        assert_relative_eq!(AdjustmentFactor::preset(Scenario::Conservative).value(), 0.99);
    }

    #[test]
    fn test_derived_factor() {
        assert_relative_eq!(AdjustmentFactor::derived(1.02, 1.0, 0.01).value(), 1.03);
        assert_relative_eq!(AdjustmentFactor::derived(1.02, -100.0, 0.01).value(), 0.8);
    }

    #[test]
    fn test_no_upside_cap() {
        assert_relative_eq!(AdjustmentFactor::new(3.5).value(), 3.5);
        assert_relative_eq!(AdjustmentFactor::new(0.1).value(), FACTOR_FLOOR);
    }

    #[test]
    fn test_run_scenarios_ordering() {
        let runner = ScenarioRunner::new(ProjectionConfig::for_range(2026, 2030));
        let tables = runner.run_scenarios(&test_snapshot());

        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].scenario_label, "optimistic");
        assert_eq!(tables[2].scenario_label, "conservative");

        // Growthier presets end higher for a positive baseline past the epoch
        let optimistic = tables[0].final_price().unwrap();
        let base = tables[1].final_price().unwrap();
        let conservative = tables[2].final_price().unwrap();
        assert!(optimistic > base);
        assert!(base > conservative);
    }

    #[test]
    fn test_run_derived_neutral_matches_base() {
        let runner = ScenarioRunner::new(ProjectionConfig::for_range(2025, 2030));
        let snapshot = test_snapshot();

        let derived = runner.run_derived(&snapshot, &ExternalFactorBundle::unavailable(), &[]);
        let base = runner.run_preset(&snapshot, Scenario::Base);

        for (d, b) in derived.rows.iter().zip(&base.rows) {
            assert_eq!(d.projected_price, b.projected_price);
        }
    }

    #[test]
    fn test_run_derived_blends_text_and_macro() {
        let runner = ScenarioRunner::new(ProjectionConfig::for_range(2025, 2026));
        let snapshot = test_snapshot();
        let bundle = ExternalFactorBundle {
            news_sentiment: Some(1.0),
            ..Default::default()
        };
        let signals = vec![SentimentSignal::new(SentimentLabel::Positive, 1.0)];

        // Both sources fully positive: factor = 1.02 + 1.0 * 0.01
        let table = runner.run_derived(&snapshot, &bundle, &signals);
        let year_after_epoch = &table.rows[1];
        assert_relative_eq!(
            year_after_epoch.projected_price.unwrap(),
            103.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::default();
        let snapshots = vec![
            FundamentalSnapshot::new("AAPL", Some(100.0), Some(5.0)),
            FundamentalSnapshot::new("MSFT", Some(300.0), Some(10.0)),
            FundamentalSnapshot::new("NODATA", None, None),
        ];

        let tables = runner.run_batch(&snapshots, AdjustmentFactor::preset(Scenario::Base), "base");
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[1].ticker, "MSFT");
        assert!(tables[2].rows.iter().all(|r| r.projected_price.is_none()));
    }
}
