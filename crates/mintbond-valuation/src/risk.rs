//! Finite-difference risk metrics.
//!
//! DV01 and convexity computed by bumping the solved yield and repricing.
//! The bump sizes and scaling divisors reproduce the conventions of the
//! upstream data exactly: ±1bp for DV01, ±2bp for convexity, each result
//! divided by 100, and the convexity second difference centered on the
//! observed market price rather than the model price.

use crate::pricing::price_at_yield;

/// One basis point in rate terms.
pub const BASIS_POINT: f64 = 0.0001;

/// Bump-based risk metrics for a bond at a solved yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskMetrics {
    /// Signed DV01 (negative for positive cash flows; the display layer
    /// scales by 10 000 when rendering dollars).
    pub dv01: f64,
    /// Convexity, normalized by market price.
    pub convexity: f64,
}

/// Computes DV01 and convexity at a solved yield.
///
/// ```text
/// dv01      = (P(ytm + 1bp) - P(ytm - 1bp)) / 2 / 100
/// convexity = (P(ytm + 2bp) - 2 * market_price + P(ytm - 2bp))
///             / (market_price * 1bp^2) / 100
/// ```
///
/// # Arguments
///
/// * `ytm` - Solved yield to maturity (decimal fraction)
/// * `coupon_rate` - Coupon rate (decimal fraction)
/// * `face_value` - Face value
/// * `years_to_maturity` - Whole years until maturity
/// * `market_price` - Observed market price (the convexity center)
#[must_use]
pub fn compute_metrics(
    ytm: f64,
    coupon_rate: f64,
    face_value: f64,
    years_to_maturity: u32,
    market_price: f64,
) -> RiskMetrics {
    let price_up = price_at_yield(ytm + BASIS_POINT, coupon_rate, face_value, years_to_maturity);
    let price_down = price_at_yield(ytm - BASIS_POINT, coupon_rate, face_value, years_to_maturity);
    let dv01 = (price_up - price_down) / 2.0 / 100.0;

    let price_up2 = price_at_yield(
        ytm + 2.0 * BASIS_POINT,
        coupon_rate,
        face_value,
        years_to_maturity,
    );
    let price_down2 = price_at_yield(
        ytm - 2.0 * BASIS_POINT,
        coupon_rate,
        face_value,
        years_to_maturity,
    );
    let convexity =
        (price_up2 - 2.0 * market_price + price_down2) / (market_price * BASIS_POINT.powi(2))
            / 100.0;

    RiskMetrics { dv01, convexity }
}
