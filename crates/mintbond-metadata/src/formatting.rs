//! Valuation report formatting.
//!
//! Plain-text rendering of a completed valuation for terminals and
//! logs. The value formats here match the metadata document so the two
//! renderings of one valuation never disagree.

use mintbond_core::types::{BondMetrics, BondSpec, MarketObservation};

/// Formats a decimal-fraction rate as a two-decimal percentage.
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Formats a dollar amount to two decimals, sign included.
#[must_use]
pub fn format_dollars(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Renders a human-readable valuation report.
///
/// One line per headline number, followed by the payment schedule in
/// `MM/DD/YYYY` form.
#[must_use]
pub fn format_valuation_report(
    spec: &BondSpec,
    observation: &MarketObservation,
    metrics: &BondMetrics,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bond Price: {}\n", observation.price()));
    output.push_str(&format!(
        "Coupon Rate: {}%\n",
        spec.coupon_rate_percent().normalize()
    ));
    output.push_str(&format!(
        "Yield to Maturity: {}\n",
        format_percent(metrics.yield_to_maturity)
    ));
    output.push_str(&format!(
        "DV01 (Dollar Value of One Basis Point): {}\n",
        format_dollars(metrics.dv01_dollars())
    ));
    output.push_str(&format!("Convexity: {:.2}\n", metrics.convexity));

    output.push_str("\nBond Payment Schedule:\n");
    for date in &metrics.payment_schedule {
        output.push_str(&date.format_mdy());
        output.push('\n');
    }

    output
}
