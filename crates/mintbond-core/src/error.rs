//! Error types for the Mintbond core crate.
//!
//! Construction-time validation errors for domain types, with enough
//! context for a caller to report what was rejected and why.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing or manipulating core domain types.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Invalid market price.
    #[error("Invalid price: {value} - {reason}")]
    InvalidPrice {
        /// The rejected price value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value,
            reason: reason.into(),
        }
    }
}
