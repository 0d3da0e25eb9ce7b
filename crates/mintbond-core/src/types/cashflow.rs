//! Cash flow type for bond payment schedules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow.
///
/// The principal redemption is folded into the final coupon payment
/// rather than modeled as a separate flow, so a bond with `n` years to
/// maturity has exactly `n` cash flows.
///
/// # Example
///
/// ```rust
/// use mintbond_core::types::{CashFlow, CashFlowKind, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::coupon(Date::from_ymd(2026, 6, 15).unwrap(), dec!(5.5));
/// assert_eq!(cf.kind(), CashFlowKind::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount
    amount: Decimal,
    /// Type of cash flow
    kind: CashFlowKind,
}

impl CashFlow {
    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal) -> Self {
        Self {
            date,
            amount,
            kind: CashFlowKind::Coupon,
        }
    }

    /// Creates the final cash flow combining coupon and principal.
    #[must_use]
    pub fn coupon_and_principal(date: Date, coupon: Decimal, principal: Decimal) -> Self {
        Self {
            date,
            amount: coupon + principal,
            kind: CashFlowKind::CouponAndPrincipal,
        }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn kind(&self) -> CashFlowKind {
        self.kind
    }
}
