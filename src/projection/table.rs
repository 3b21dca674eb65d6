//! Projection output structures

use serde::{Deserialize, Serialize};

/// One projected year of valuation metrics.
///
/// Any field whose inputs were unavailable stays `None`; undefined values
/// propagate through the table rather than collapsing to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Calendar year this row projects
    pub year: i32,

    /// Projected price (baseline price x multiplier)
    pub projected_price: Option<f64>,

    /// Projected earnings per share
    pub projected_eps: Option<f64>,

    /// Projected P/E, defined only when price and nonzero EPS both are
    pub projected_pe: Option<f64>,

    /// Illustrative intrinsic value: 90% of projected price
    pub projected_intrinsic_value: Option<f64>,
}

/// Ordered projection over an inclusive year range, one row per year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionTable {
    /// Ticker the projection was run for
    pub ticker: String,

    /// Scenario or factor label for display
    pub scenario_label: String,

    /// Rows in strictly increasing year order, no gaps
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    pub fn new(ticker: impl Into<String>, scenario_label: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            scenario_label: scenario_label.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Final projected price, when the table is non-empty and price defined
    pub fn final_price(&self) -> Option<f64> {
        self.rows.last().and_then(|r| r.projected_price)
    }

    /// Summary statistics over the table
    pub fn summary(&self) -> ProjectionSummary {
        let first_price = self.rows.first().and_then(|r| r.projected_price);
        let final_price = self.final_price();
        let growth_multiple = match (first_price, final_price) {
            (Some(first), Some(last)) if first != 0.0 => Some(last / first),
            _ => None,
        };

        ProjectionSummary {
            total_years: self.rows.len() as u32,
            first_year: self.rows.first().map(|r| r.year),
            final_year: self.rows.last().map(|r| r.year),
            first_price,
            final_price,
            growth_multiple,
        }
    }
}

/// Summary statistics for a projection table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub first_year: Option<i32>,
    pub final_year: Option<i32>,
    pub first_price: Option<f64>,
    pub final_price: Option<f64>,
    pub growth_multiple: Option<f64>,
}
