//! Flat-yield bond pricing.
//!
//! Present value of a fixed-coupon bond's cash flows under a single flat
//! discount rate. Each of periods `1..=n` pays `coupon_rate * face_value`;
//! the final period additionally redeems the face value (folded into the
//! last coupon, not a separate flow).

/// Present value of the bond's cash flows at the given flat yield.
///
/// The discount factor for period `t` is `(1 + yield_rate)^t`. Any real
/// yield above -100% is accepted; negative rates simply produce larger
/// present values. Callers must not pass `yield_rate <= -1`, which is
/// outside the economically valid domain.
///
/// # Example
///
/// ```rust
/// use mintbond_valuation::price_at_yield;
///
/// // A par bond: priced at face when yield equals coupon
/// let price = price_at_yield(0.05, 0.05, 100.0, 5);
/// assert!((price - 100.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn price_at_yield(
    yield_rate: f64,
    coupon_rate: f64,
    face_value: f64,
    years_to_maturity: u32,
) -> f64 {
    let coupon = coupon_rate * face_value;
    let mut pv = 0.0;

    for t in 1..=years_to_maturity {
        let mut cash_flow = coupon;
        if t == years_to_maturity {
            cash_flow += face_value;
        }
        pv += cash_flow / (1.0 + yield_rate).powi(t as i32);
    }

    pv
}

/// Analytical derivative of [`price_at_yield`] with respect to yield.
///
/// Used to drive Newton-Raphson; always negative for positive cash
/// flows (price falls as yield rises).
#[must_use]
pub fn price_derivative_at_yield(
    yield_rate: f64,
    coupon_rate: f64,
    face_value: f64,
    years_to_maturity: u32,
) -> f64 {
    let coupon = coupon_rate * face_value;
    let mut dpv = 0.0;

    for t in 1..=years_to_maturity {
        let mut cash_flow = coupon;
        if t == years_to_maturity {
            cash_flow += face_value;
        }
        dpv -= f64::from(t) * cash_flow / (1.0 + yield_rate).powi(t as i32 + 1);
    }

    dpv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_coupon_is_pure_discount() {
        // price(y, 0, F, n) = F / (1+y)^n exactly
        let price = price_at_yield(0.07, 0.0, 100.0, 10);
        assert_relative_eq!(price, 100.0 / 1.07_f64.powi(10), epsilon = 1e-12);
    }

    #[test]
    fn test_par_bond_prices_at_face() {
        for years in [1, 5, 30] {
            let price = price_at_yield(0.05, 0.05, 100.0, years);
            assert_relative_eq!(price, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_negative_yield_raises_price() {
        let at_zero = price_at_yield(0.0, 0.05, 100.0, 5);
        let below_zero = price_at_yield(-0.01, 0.05, 100.0, 5);
        assert!(below_zero > at_zero);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-7;
        for y in [0.01, 0.05, 0.12] {
            let analytic = price_derivative_at_yield(y, 0.05, 100.0, 7);
            let numeric = (price_at_yield(y + h, 0.05, 100.0, 7)
                - price_at_yield(y - h, 0.05, 100.0, 7))
                / (2.0 * h);
            assert_relative_eq!(analytic, numeric, epsilon = 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_price_strictly_decreasing_in_yield(
            coupon in 0.0f64..0.15,
            years in 1u32..=30,
            y in -0.05f64..0.25,
        ) {
            let lower = price_at_yield(y, coupon, 100.0, years);
            let higher = price_at_yield(y + 0.001, coupon, 100.0, years);
            prop_assert!(higher < lower);
        }
    }
}
