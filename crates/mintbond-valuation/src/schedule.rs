//! Payment schedule generation.
//!
//! Annual anniversary dates from an observation date out to maturity,
//! plus the dated cash flows they carry.

use mintbond_core::types::{BondSpec, CashFlow, Date};

use crate::error::ValuationResult;

/// Produces the scheduled payment dates for an annual-coupon bond.
///
/// Returns `years_to_maturity` dates; date `i` (0-based) is `start`
/// advanced by `i + 1` years. The sequence is finite, eager, strictly
/// increasing and deterministic.
///
/// Leap-day rule: a Feb 29 start clamps to Feb 28 in non-leap target
/// years (the day is clamped to the target month's length).
///
/// # Example
///
/// ```rust
/// use mintbond_core::types::Date;
/// use mintbond_valuation::payment_schedule;
///
/// let start = Date::from_ymd(2025, 6, 15).unwrap();
/// let schedule = payment_schedule(start, 3).unwrap();
/// assert_eq!(schedule.len(), 3);
/// assert_eq!(schedule[2], Date::from_ymd(2028, 6, 15).unwrap());
/// ```
pub fn payment_schedule(start: Date, years_to_maturity: u32) -> ValuationResult<Vec<Date>> {
    let mut dates = Vec::with_capacity(years_to_maturity as usize);

    for offset in 1..=years_to_maturity {
        dates.push(start.add_years(offset as i32)?);
    }

    Ok(dates)
}

/// Produces the dated cash flows for a bond starting from `start`.
///
/// One coupon per scheduled date; the final flow folds the principal
/// redemption into the last coupon, so the sequence has exactly
/// `years_to_maturity` entries.
pub fn scheduled_cash_flows(spec: &BondSpec, start: Date) -> ValuationResult<Vec<CashFlow>> {
    let dates = payment_schedule(start, spec.years_to_maturity())?;
    let coupon = spec.coupon_amount();
    let last = dates.len() - 1;

    Ok(dates
        .into_iter()
        .enumerate()
        .map(|(i, date)| {
            if i == last {
                CashFlow::coupon_and_principal(date, coupon, spec.face_value())
            } else {
                CashFlow::coupon(date, coupon)
            }
        })
        .collect())
}
