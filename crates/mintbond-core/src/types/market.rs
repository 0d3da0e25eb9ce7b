//! Market price observation type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::{CoreError, CoreResult};

/// An observed market price for a bond on a given date.
///
/// The engine never generates observations; they arrive from a quote
/// source (a live feed, a simulator, or replayed data) and are validated
/// here so the solver can assume a positive price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketObservation {
    /// Observed price (per face value quoted, e.g. 99.87)
    price: Decimal,
    /// Date the price was observed
    observed_on: Date,
}

impl MarketObservation {
    /// Creates a new market observation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPrice` if `price <= 0`.
    pub fn new(price: Decimal, observed_on: Date) -> CoreResult<Self> {
        if price <= Decimal::ZERO {
            return Err(CoreError::invalid_price(price, "price must be positive"));
        }
        Ok(Self { price, observed_on })
    }

    /// Returns the observed price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the observation date.
    #[must_use]
    pub fn observed_on(&self) -> Date {
        self.observed_on
    }
}
