//! Bond specification type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Specification of a fixed-coupon bond.
///
/// Immutable once constructed; the validating constructors guarantee the
/// economic invariants (`years_to_maturity >= 1`, a non-negative coupon,
/// a positive face value), so downstream code can price without
/// re-checking.
///
/// The coupon rate is held as a percentage (`5.5` means 5.5%), matching
/// how rates are quoted; [`BondSpec::coupon_rate`] converts to a decimal
/// fraction for calculations.
///
/// # Example
///
/// ```rust
/// use mintbond_core::types::BondSpec;
/// use rust_decimal_macros::dec;
///
/// let spec = BondSpec::annual(dec!(5.5), dec!(100), 5).unwrap();
/// assert_eq!(spec.coupon_rate(), dec!(0.055));
/// assert_eq!(spec.coupon_amount(), dec!(5.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSpec {
    /// Coupon rate as a percentage (e.g., 5.5 for 5.5%)
    coupon_rate_percent: Decimal,
    /// Face value (typically 100)
    face_value: Decimal,
    /// Whole years until maturity
    years_to_maturity: u32,
    /// Coupon payments per year
    coupons_per_year: u32,
}

impl BondSpec {
    /// Creates a new bond specification.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSpec` if `years_to_maturity < 1`,
    /// `coupon_rate_percent < 0`, `face_value <= 0`, or
    /// `coupons_per_year < 1`.
    pub fn new(
        coupon_rate_percent: Decimal,
        face_value: Decimal,
        years_to_maturity: u32,
        coupons_per_year: u32,
    ) -> CoreResult<Self> {
        if years_to_maturity < 1 {
            return Err(CoreError::invalid_spec("years to maturity must be at least 1"));
        }
        if coupon_rate_percent < Decimal::ZERO {
            return Err(CoreError::invalid_spec(format!(
                "coupon rate must be non-negative, got {coupon_rate_percent}%"
            )));
        }
        if face_value <= Decimal::ZERO {
            return Err(CoreError::invalid_spec(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if coupons_per_year < 1 {
            return Err(CoreError::invalid_spec("coupons per year must be at least 1"));
        }

        Ok(Self {
            coupon_rate_percent,
            face_value,
            years_to_maturity,
            coupons_per_year,
        })
    }

    /// Creates an annual-coupon bond specification.
    ///
    /// # Errors
    ///
    /// Same validation as [`BondSpec::new`].
    pub fn annual(
        coupon_rate_percent: Decimal,
        face_value: Decimal,
        years_to_maturity: u32,
    ) -> CoreResult<Self> {
        Self::new(coupon_rate_percent, face_value, years_to_maturity, 1)
    }

    /// Returns the coupon rate as a percentage (5.5 for 5.5%).
    #[must_use]
    pub fn coupon_rate_percent(&self) -> Decimal {
        self.coupon_rate_percent
    }

    /// Returns the coupon rate as a decimal fraction (0.055 for 5.5%).
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate_percent / Decimal::ONE_HUNDRED
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Returns the number of whole years until maturity.
    #[must_use]
    pub fn years_to_maturity(&self) -> u32 {
        self.years_to_maturity
    }

    /// Returns the number of coupon payments per year.
    #[must_use]
    pub fn coupons_per_year(&self) -> u32 {
        self.coupons_per_year
    }

    /// Returns the coupon amount paid each period.
    #[must_use]
    pub fn coupon_amount(&self) -> Decimal {
        self.coupon_rate() * self.face_value / Decimal::from(self.coupons_per_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_spec() {
        let spec = BondSpec::annual(dec!(5.5), dec!(100), 5).unwrap();
        assert_eq!(spec.coupon_rate_percent(), dec!(5.5));
        assert_eq!(spec.coupon_rate(), dec!(0.055));
        assert_eq!(spec.face_value(), dec!(100));
        assert_eq!(spec.years_to_maturity(), 5);
        assert_eq!(spec.coupons_per_year(), 1);
    }

    #[test]
    fn test_coupon_amount() {
        let spec = BondSpec::annual(dec!(5), dec!(100), 3).unwrap();
        assert_eq!(spec.coupon_amount(), dec!(5));

        let semi = BondSpec::new(dec!(5), dec!(100), 3, 2).unwrap();
        assert_eq!(semi.coupon_amount(), dec!(2.5));
    }

    #[test]
    fn test_zero_coupon_allowed() {
        let spec = BondSpec::annual(dec!(0), dec!(100), 1).unwrap();
        assert_eq!(spec.coupon_amount(), dec!(0));
    }

    #[test]
    fn test_rejects_zero_maturity() {
        assert!(BondSpec::annual(dec!(5), dec!(100), 0).is_err());
    }

    #[test]
    fn test_rejects_negative_coupon() {
        assert!(BondSpec::annual(dec!(-1), dec!(100), 5).is_err());
    }

    #[test]
    fn test_rejects_non_positive_face() {
        assert!(BondSpec::annual(dec!(5), dec!(0), 5).is_err());
        assert!(BondSpec::annual(dec!(5), dec!(-100), 5).is_err());
    }

    #[test]
    fn test_rejects_zero_frequency() {
        assert!(BondSpec::new(dec!(5), dec!(100), 5, 0).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let spec = BondSpec::annual(dec!(5.5), dec!(100), 5).unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: BondSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, parsed);
    }
}
