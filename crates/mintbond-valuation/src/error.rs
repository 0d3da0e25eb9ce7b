//! Error types for the valuation engine.

use thiserror::Error;

use mintbond_core::CoreError;
use mintbond_math::MathError;

/// A specialized Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Errors that can occur during bond valuation.
#[derive(Error, Debug, Clone)]
pub enum ValuationError {
    /// Input rejected at entry (maturity, coupon rate, or price out of
    /// the valid domain). Not recovered; the caller must fix the input.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the rejected input.
        reason: String,
    },

    /// Yield solve exceeded the iteration cap without meeting tolerance.
    /// Not retried automatically; the caller may retry with a different
    /// seed or a looser tolerance.
    #[error("Yield solve failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Core type error (dates, specifications).
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Math error other than convergence failure.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl ValuationError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValuationError::invalid_input("market price must be positive");
        assert!(err.to_string().contains("Invalid input"));

        let err = ValuationError::ConvergenceFailed {
            iterations: 100,
            residual: 0.5,
        };
        assert!(err.to_string().contains("100 iterations"));
    }
}
