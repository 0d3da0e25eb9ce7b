//! End-to-end valuation scenarios.

use approx::assert_relative_eq;
use rust_decimal_macros::dec;

use mintbond_core::prelude::*;
use mintbond_valuation::{
    price_at_yield, BondValuationEngine, FixedQuote, QuoteSource, UniformBandQuotes, YtmSolver,
    BASIS_POINT,
};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn par_bond_scenario() {
    // 5% coupon, 5 years, priced at par: ytm equals the coupon rate and
    // the risk numbers match the bump formulas evaluated at that yield.
    let spec = BondSpec::annual(dec!(5), dec!(100), 5).unwrap();
    let obs = MarketObservation::new(dec!(100), date(2025, 6, 15)).unwrap();

    let valuation = BondValuationEngine::new().evaluate(&spec, &obs).unwrap();
    let ytm = valuation.metrics.yield_to_maturity;

    assert_relative_eq!(ytm, 0.05, epsilon = 1e-9);

    let p = |y: f64| price_at_yield(y, 0.05, 100.0, 5);
    let expected_dv01 = (p(ytm + BASIS_POINT) - p(ytm - BASIS_POINT)) / 2.0 / 100.0;
    let expected_convexity = (p(ytm + 2.0 * BASIS_POINT) - 200.0 + p(ytm - 2.0 * BASIS_POINT))
        / (100.0 * BASIS_POINT * BASIS_POINT)
        / 100.0;

    assert_relative_eq!(valuation.metrics.dv01, expected_dv01, epsilon = 1e-12);
    assert_relative_eq!(valuation.metrics.convexity, expected_convexity, epsilon = 1e-12);
}

#[test]
fn zero_coupon_one_year_scenario() {
    // price = F / (1+y), so the solved yield is 100/95 - 1
    let spec = BondSpec::annual(dec!(0), dec!(100), 1).unwrap();
    let obs = MarketObservation::new(dec!(95), date(2025, 6, 15)).unwrap();

    let valuation = BondValuationEngine::new().evaluate(&spec, &obs).unwrap();

    assert_relative_eq!(
        valuation.metrics.yield_to_maturity,
        100.0 / 95.0 - 1.0,
        epsilon = 1e-9
    );
    assert_eq!(valuation.metrics.payment_schedule, vec![date(2026, 6, 15)]);
}

#[test]
fn discount_and_premium_straddle_the_coupon() {
    let spec = BondSpec::annual(dec!(6), dec!(100), 10).unwrap();
    let engine = BondValuationEngine::new();

    let discount = engine
        .evaluate(
            &spec,
            &MarketObservation::new(dec!(92), date(2025, 6, 15)).unwrap(),
        )
        .unwrap();
    let premium = engine
        .evaluate(
            &spec,
            &MarketObservation::new(dec!(108), date(2025, 6, 15)).unwrap(),
        )
        .unwrap();

    assert!(discount.metrics.yield_to_maturity > 0.06);
    assert!(premium.metrics.yield_to_maturity < 0.06);
}

#[test]
fn simulated_quotes_feed_the_engine() {
    // A seeded simulator wired straight into the engine: every draw in
    // the band must produce a convergent valuation near the coupon.
    let spec = BondSpec::annual(dec!(5), dec!(100), 5).unwrap();
    let engine = BondValuationEngine::new();
    let mut source = UniformBandQuotes::new(date(2025, 6, 15)).with_seed(42);

    for _ in 0..20 {
        let obs = source.quote().unwrap();
        let valuation = engine.evaluate(&spec, &obs).unwrap();

        // Prices a hair under par mean yields at or a hair over the coupon
        assert!(valuation.metrics.yield_to_maturity > 0.05 - 1e-9);
        assert!(valuation.metrics.yield_to_maturity < 0.06);
        assert!(valuation.residual.abs() < 1e-8);
    }
}

#[test]
fn fixed_quote_replays_into_identical_valuations() {
    let spec = BondSpec::annual(dec!(5.5), dec!(100), 7).unwrap();
    let mut source = FixedQuote::new(
        MarketObservation::new(dec!(99.87), date(2025, 6, 15)).unwrap(),
    );
    let engine = BondValuationEngine::new();

    let first = engine.evaluate(&spec, &source.quote().unwrap()).unwrap();
    let second = engine.evaluate(&spec, &source.quote().unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn leap_day_observation_schedules_cleanly() {
    let spec = BondSpec::annual(dec!(5), dec!(100), 4).unwrap();
    let obs = MarketObservation::new(dec!(100), date(2024, 2, 29)).unwrap();

    let valuation = BondValuationEngine::new().evaluate(&spec, &obs).unwrap();
    let schedule = &valuation.metrics.payment_schedule;

    assert_eq!(schedule[0], date(2025, 2, 28));
    assert_eq!(schedule[3], date(2028, 2, 29));
    assert!(schedule.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn tight_cap_surfaces_convergence_failure() {
    let spec = BondSpec::annual(dec!(5), dec!(100), 5).unwrap();
    let obs = MarketObservation::new(dec!(70), date(2025, 6, 15)).unwrap();

    let engine = BondValuationEngine::with_solver(YtmSolver::new().with_max_iterations(1));
    let err = engine.evaluate(&spec, &obs).unwrap_err();

    assert!(err.to_string().contains("converge"));
}
