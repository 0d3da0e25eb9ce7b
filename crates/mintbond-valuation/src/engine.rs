//! The bond valuation engine facade.

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use mintbond_core::types::{BondMetrics, BondSpec, MarketObservation};

use crate::error::ValuationResult;
use crate::risk::compute_metrics;
use crate::schedule::payment_schedule;
use crate::ytm::YtmSolver;

/// A completed valuation: the derived metrics plus solve statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Derived yield, risk metrics and payment schedule.
    pub metrics: BondMetrics,
    /// Newton iterations used by the yield solve.
    pub iterations: u32,
    /// Price residual at the solved yield.
    pub residual: f64,
}

/// Bond valuation engine.
///
/// Solves yield to maturity for an observed price, derives DV01 and
/// convexity by bumped repricing, and builds the payment schedule from
/// the observation date. Pure over its inputs apart from the internal
/// yield iteration; holds no shared mutable state and is safe to use
/// from independent threads.
///
/// # Example
///
/// ```rust
/// use mintbond_core::prelude::*;
/// use mintbond_valuation::BondValuationEngine;
/// use rust_decimal_macros::dec;
///
/// let spec = BondSpec::annual(dec!(5), dec!(100), 5)?;
/// let observation = MarketObservation::new(dec!(99.87), Date::from_ymd(2025, 6, 15)?)?;
///
/// let valuation = BondValuationEngine::new().evaluate(&spec, &observation)?;
/// assert_eq!(valuation.metrics.payment_schedule.len(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BondValuationEngine {
    solver: YtmSolver,
}

impl BondValuationEngine {
    /// Creates an engine with the default solver configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            solver: YtmSolver::new(),
        }
    }

    /// Creates an engine with a custom yield solver.
    #[must_use]
    pub fn with_solver(solver: YtmSolver) -> Self {
        Self { solver }
    }

    /// Evaluates a bond against a market observation.
    ///
    /// # Errors
    ///
    /// `ValuationError::InvalidInput` for inputs outside the valid
    /// domain, `ValuationError::ConvergenceFailed` if the yield solve
    /// exhausts its iteration cap.
    pub fn evaluate(
        &self,
        spec: &BondSpec,
        observation: &MarketObservation,
    ) -> ValuationResult<Valuation> {
        let coupon_rate = spec.coupon_rate().to_f64().unwrap_or(0.0);
        let face_value = spec.face_value().to_f64().unwrap_or(0.0);
        let market_price = observation.price().to_f64().unwrap_or(0.0);
        let years = spec.years_to_maturity();

        let solved = self
            .solver
            .solve(coupon_rate, face_value, years, market_price)?;

        let risk = compute_metrics(
            solved.yield_to_maturity,
            coupon_rate,
            face_value,
            years,
            market_price,
        );

        let schedule = payment_schedule(observation.observed_on(), years)?;

        debug!(
            "valuation complete: ytm={:.6} dv01={:.6e} convexity={:.4}",
            solved.yield_to_maturity, risk.dv01, risk.convexity
        );

        Ok(Valuation {
            metrics: BondMetrics {
                yield_to_maturity: solved.yield_to_maturity,
                dv01: risk.dv01,
                convexity: risk.convexity,
                payment_schedule: schedule,
            },
            iterations: solved.iterations,
            residual: solved.residual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mintbond_core::types::Date;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_par_bond_valuation() {
        let spec = BondSpec::annual(dec!(5), dec!(100), 5).unwrap();
        let obs = MarketObservation::new(dec!(100), date(2025, 6, 15)).unwrap();

        let valuation = BondValuationEngine::new().evaluate(&spec, &obs).unwrap();

        assert_relative_eq!(valuation.metrics.yield_to_maturity, 0.05, epsilon = 1e-9);
        assert_eq!(valuation.metrics.payment_schedule.len(), 5);
        assert!(valuation.metrics.dv01 < 0.0);
        assert!(valuation.metrics.convexity > 0.0);
    }

    #[test]
    fn test_schedule_starts_from_observation_date() {
        let spec = BondSpec::annual(dec!(5), dec!(100), 3).unwrap();
        let obs = MarketObservation::new(dec!(99.5), date(2025, 6, 15)).unwrap();

        let valuation = BondValuationEngine::new().evaluate(&spec, &obs).unwrap();

        assert_eq!(
            valuation.metrics.payment_schedule,
            vec![date(2026, 6, 15), date(2027, 6, 15), date(2028, 6, 15)]
        );
    }

    #[test]
    fn test_custom_solver_cap_propagates() {
        let spec = BondSpec::annual(dec!(5), dec!(100), 5).unwrap();
        let obs = MarketObservation::new(dec!(70), date(2025, 6, 15)).unwrap();

        let engine =
            BondValuationEngine::with_solver(YtmSolver::new().with_max_iterations(1));

        assert!(matches!(
            engine.evaluate(&spec, &obs),
            Err(crate::error::ValuationError::ConvergenceFailed { .. })
        ));
    }

    #[test]
    fn test_valuation_serde_roundtrip() {
        let spec = BondSpec::annual(dec!(5), dec!(100), 2).unwrap();
        let obs = MarketObservation::new(dec!(99.9), date(2025, 6, 15)).unwrap();

        let valuation = BondValuationEngine::new().evaluate(&spec, &obs).unwrap();
        let json = serde_json::to_string(&valuation).unwrap();
        let parsed: Valuation = serde_json::from_str(&json).unwrap();

        assert_eq!(valuation, parsed);
    }
}
