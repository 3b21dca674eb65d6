//! Core projection engine for annual future-value tables

use crate::scenario::AdjustmentFactor;
use crate::snapshot::FundamentalSnapshot;

use super::table::{ProjectionRow, ProjectionTable};

use chrono::{Datelike, Utc};

/// Fixed epoch the compounding exponent is anchored to.
///
/// The multiplier for a given year is `factor^(year - BASE_YEAR)` regardless
/// of where the requested range starts, so a range beginning after the epoch
/// starts already-compounded rather than at 1.0.
pub const BASE_YEAR: i32 = 2025;

/// Illustrative intrinsic-value ratio: intrinsic value = 90% of projected
/// price. A placeholder calibration constant, not a fundamentals-based
/// valuation.
pub const INTRINSIC_VALUE_RATIO: f64 = 0.9;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// First projected year (inclusive)
    pub year_start: i32,

    /// Last projected year (inclusive)
    pub year_end: i32,

    /// Epoch year the compounding exponent is measured from
    pub base_year: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            year_start: BASE_YEAR,
            year_end: BASE_YEAR + 5,
            base_year: BASE_YEAR,
        }
    }
}

impl ProjectionConfig {
    /// Config spanning an explicit inclusive range, anchored to [`BASE_YEAR`]
    pub fn for_range(year_start: i32, year_end: i32) -> Self {
        Self {
            year_start,
            year_end,
            base_year: BASE_YEAR,
        }
    }

    /// Config starting at the current calendar year and anchored to it,
    /// spanning `horizon_years` beyond it
    pub fn anchored_to_today(horizon_years: u32) -> Self {
        let current_year = Utc::now().year();
        Self {
            year_start: current_year,
            year_end: current_year + horizon_years as i32,
            base_year: current_year,
        }
    }

    /// Number of rows this config will produce (0 for a degenerate range)
    pub fn row_count(&self) -> usize {
        if self.year_start > self.year_end {
            0
        } else {
            (self.year_end - self.year_start + 1) as usize
        }
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a snapshot's fundamentals over the configured year range.
    ///
    /// Pure over its inputs: missing baseline fields propagate as `None`
    /// in every row, and a degenerate range yields an empty table.
    pub fn project_snapshot(
        &self,
        snapshot: &FundamentalSnapshot,
        factor: AdjustmentFactor,
        label: &str,
    ) -> ProjectionTable {
        let mut table = ProjectionTable::new(snapshot.ticker.clone(), label);
        for row in project(
            snapshot.price,
            snapshot.eps,
            self.config.year_start,
            self.config.year_end,
            factor.value(),
            self.config.base_year,
        ) {
            table.add_row(row);
        }
        table
    }
}

/// Project baseline price and EPS over an inclusive year range.
///
/// For each year, `multiplier = factor^(year - base_year)`:
/// - `projected_price = price * multiplier` when price is defined
/// - `projected_eps` analogous
/// - `projected_pe = projected_price / projected_eps` only when both are
///   defined and EPS is nonzero
/// - `projected_intrinsic_value = projected_price * 0.9` when defined
///
/// No rounding is applied here; presentation rounding is the caller's
/// concern. A range with `year_start > year_end` yields an empty vector.
pub fn project(
    price: Option<f64>,
    eps: Option<f64>,
    year_start: i32,
    year_end: i32,
    factor: f64,
    base_year: i32,
) -> Vec<ProjectionRow> {
    if year_start > year_end {
        return Vec::new();
    }

    (year_start..=year_end)
        .map(|year| {
            let multiplier = factor.powi(year - base_year);
            let projected_price = price.map(|p| p * multiplier);
            let projected_eps = eps.map(|e| e * multiplier);
            let projected_pe = match (projected_price, projected_eps) {
                (Some(p), Some(e)) if e != 0.0 => Some(p / e),
                _ => None,
            };
            let projected_intrinsic_value = projected_price.map(|p| p * INTRINSIC_VALUE_RATIO);

            ProjectionRow {
                year,
                projected_price,
                projected_eps,
                projected_pe,
                projected_intrinsic_value,
            }
        })
        .collect()
}
