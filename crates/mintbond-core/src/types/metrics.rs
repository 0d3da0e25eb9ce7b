//! Derived valuation metrics.

use serde::{Deserialize, Serialize};

use super::Date;

/// Valuation metrics derived from a bond specification and a market
/// observation.
///
/// Recomputed on every evaluation and never persisted. The yield, DV01
/// and convexity are solver outputs and therefore `f64`; the payment
/// schedule contains one date per year to maturity.
///
/// DV01 follows the quoting convention of the upstream data: it is the
/// averaged signed price change for a one-basis-point yield bump divided
/// by 100, which is negative for a bond with positive cash flows. The
/// rendering layer scales it by 10 000 when displaying dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondMetrics {
    /// Yield to maturity as a decimal fraction (0.055 for 5.5%)
    pub yield_to_maturity: f64,
    /// Dollar value of one basis point (signed, see type docs)
    pub dv01: f64,
    /// Convexity, normalized by market price
    pub convexity: f64,
    /// Scheduled payment dates, one per year, strictly increasing
    pub payment_schedule: Vec<Date>,
}

impl BondMetrics {
    /// Returns the yield to maturity as a percentage (5.5 for 5.5%).
    #[must_use]
    pub fn yield_to_maturity_percent(&self) -> f64 {
        self.yield_to_maturity * 100.0
    }

    /// Returns DV01 scaled to dollars per basis point, the display
    /// convention.
    #[must_use]
    pub fn dv01_dollars(&self) -> f64 {
        self.dv01 * 10_000.0
    }
}
