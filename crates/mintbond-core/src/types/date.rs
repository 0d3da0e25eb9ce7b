//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// date operations the valuation engine needs and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use mintbond_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let anniversary = date.add_years(3).unwrap();
/// assert_eq!(anniversary.year(), 2028);
/// assert_eq!(anniversary.day(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of years to the date.
    ///
    /// If the resulting day would be invalid (Feb 29 in a non-leap year),
    /// it is clamped to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let new_year = self.year() + years;
        let max_day = days_in_month(new_year, self.month());
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Formats the date as MM/DD/YYYY, the convention used in payment
    /// schedules and token metadata attributes.
    #[must_use]
    pub fn format_mdy(&self) -> String {
        format!("{}", self.0.format("%m/%d/%Y"))
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Helper function to get days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Helper function to check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date.year(), 2025);
        assert!(Date::parse("not a date").is_err());
    }

    #[test]
    fn test_add_years() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let result = date.add_years(5).unwrap();
        assert_eq!(result, Date::from_ymd(2030, 6, 15).unwrap());
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        let leap_day = Date::from_ymd(2024, 2, 29).unwrap();

        // Non-leap target year clamps to Feb 28
        let clamped = leap_day.add_years(1).unwrap();
        assert_eq!(clamped, Date::from_ymd(2025, 2, 28).unwrap());

        // Leap target year keeps Feb 29
        let kept = leap_day.add_years(4).unwrap();
        assert_eq!(kept, Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2025, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Date::from_ymd(2025, 1, 1).unwrap().days_in_month(), 31);
        assert_eq!(Date::from_ymd(2025, 2, 1).unwrap().days_in_month(), 28);
        assert_eq!(Date::from_ymd(2024, 2, 1).unwrap().days_in_month(), 29);
        assert_eq!(Date::from_ymd(2025, 4, 1).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(format!("{}", date), "2025-06-15");
    }

    #[test]
    fn test_format_mdy() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(date.format_mdy(), "06/05/2025");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
