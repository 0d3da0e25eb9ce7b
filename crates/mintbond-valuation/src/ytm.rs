//! Yield-to-maturity solver.
//!
//! Finds the flat yield at which the bond's discounted cash flows equal
//! the observed market price. Newton-Raphson with the analytical price
//! derivative, seeded with the coupon rate, which is within a Newton
//! step or two of the root for prices anywhere near par.
//!
//! # Example
//!
//! ```rust
//! use mintbond_valuation::YtmSolver;
//!
//! let solver = YtmSolver::new();
//! let result = solver.solve(0.05, 100.0, 5, 100.0).unwrap();
//! assert!((result.yield_to_maturity - 0.05).abs() < 1e-9);
//! ```

use log::debug;

use mintbond_math::error::MathError;
use mintbond_math::solvers::{newton_raphson, SolverConfig};

use crate::error::{ValuationError, ValuationResult};
use crate::pricing::{price_at_yield, price_derivative_at_yield};

/// Result of a yield solve.
#[derive(Debug, Clone, Copy)]
pub struct YtmResult {
    /// The solved yield (as a decimal fraction, e.g., 0.05 for 5%).
    pub yield_to_maturity: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final residual (price error at the solved yield).
    pub residual: f64,
}

/// Yield-to-maturity solver.
///
/// Validates inputs at entry, then iterates Newton-Raphson under a hard
/// iteration cap. Exceeding the cap surfaces
/// [`ValuationError::ConvergenceFailed`]; the caller may retry with a
/// different configuration, nothing is retried here.
#[derive(Debug, Clone)]
pub struct YtmSolver {
    /// Solver configuration.
    config: SolverConfig,
}

impl Default for YtmSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YtmSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-10
    /// Default max iterations: 100
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(1e-10, 100),
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = SolverConfig::new(tolerance, self.config.max_iterations);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = SolverConfig::new(self.config.tolerance, max_iterations);
        self
    }

    /// Solves for the yield at which the bond prices at `market_price`.
    ///
    /// # Arguments
    ///
    /// * `coupon_rate` - Coupon rate as a decimal fraction (0.055 for 5.5%)
    /// * `face_value` - Face value of the bond
    /// * `years_to_maturity` - Whole years until maturity
    /// * `market_price` - Observed market price
    ///
    /// # Errors
    ///
    /// `ValuationError::InvalidInput` if `years_to_maturity < 1`,
    /// `coupon_rate < 0`, `face_value <= 0`, or `market_price <= 0`;
    /// `ValuationError::ConvergenceFailed` if the iteration cap is
    /// reached without meeting tolerance.
    pub fn solve(
        &self,
        coupon_rate: f64,
        face_value: f64,
        years_to_maturity: u32,
        market_price: f64,
    ) -> ValuationResult<YtmResult> {
        if years_to_maturity < 1 {
            return Err(ValuationError::invalid_input(
                "years to maturity must be at least 1",
            ));
        }
        if coupon_rate < 0.0 {
            return Err(ValuationError::invalid_input(format!(
                "coupon rate must be non-negative, got {coupon_rate}"
            )));
        }
        if face_value <= 0.0 {
            return Err(ValuationError::invalid_input(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if market_price <= 0.0 {
            return Err(ValuationError::invalid_input(format!(
                "market price must be positive, got {market_price}"
            )));
        }

        let objective =
            |y: f64| price_at_yield(y, coupon_rate, face_value, years_to_maturity) - market_price;
        let derivative =
            |y: f64| price_derivative_at_yield(y, coupon_rate, face_value, years_to_maturity);

        // The coupon rate is the yield of the same bond at par, so it
        // seeds the iteration close to the root for near-par prices.
        match newton_raphson(objective, derivative, coupon_rate, &self.config) {
            Ok(result) => {
                debug!(
                    "ytm solved: {:.8} in {} iterations (residual {:.2e})",
                    result.root, result.iterations, result.residual
                );
                Ok(YtmResult {
                    yield_to_maturity: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                })
            }
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
            }) => Err(ValuationError::ConvergenceFailed {
                iterations,
                residual,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
