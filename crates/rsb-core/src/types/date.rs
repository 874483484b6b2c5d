//! Date type for savings bond calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// A calendar date for bond calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// calendar operations the schedule and accrual engines rely on: month-end
/// rolling, year arithmetic with month-end clamping, and day iteration.
///
/// # Example
///
/// ```rust
/// use rsb_core::types::Date;
///
/// let date = Date::from_ymd(2023, 10, 20).unwrap();
/// let maturity = date.add_years(3).unwrap();
/// assert_eq!(maturity, Date::from_ymd(2026, 10, 20).unwrap());
/// assert_eq!(date.end_of_month().day(), 31);
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
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
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

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// A February 29 start rolls back to February 28 when the target year
    /// is not a leap year.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        let new_year = self.year() + years;
        let new_day = self.day().min(days_in_month(new_year, self.month()));

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the last day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.with_day_clamped(self.days_in_month())
    }

    /// Checks if the date is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the first day of the date's month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        self.with_day_clamped(1)
    }

    /// Returns true if both dates fall in the same calendar month.
    #[must_use]
    pub fn same_month(&self, other: &Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Iterates every calendar day from `self` through `end`, inclusive.
    ///
    /// Yields nothing when `end` is before `self`.
    pub fn iter_days_through(self, end: Date) -> impl Iterator<Item = Date> {
        let len = self.days_between(&end) + 1;
        (0..len.max(0)).map(move |offset| self.add_days(offset))
    }

    fn with_day_clamped(&self, day: u32) -> Self {
        let day = day.clamp(1, self.days_in_month());
        // The clamp keeps the day inside the month, so the result is always valid.
        self.0.with_day(day).map_or(*self, Date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
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

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2023, 10, 20).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 10);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_add_months_clamps() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result, Date::from_ymd(2025, 2, 28).unwrap());

        let back = date.add_months(-2).unwrap();
        assert_eq!(back, Date::from_ymd(2024, 11, 30).unwrap());
    }

    #[test]
    fn test_add_years_from_leap_day() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(leap.add_years(3).unwrap(), Date::from_ymd(2027, 2, 28).unwrap());
        assert_eq!(leap.add_years(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2025, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2023, 10, 20).unwrap();
        let d2 = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 163);
        assert_eq!(d2.days_between(&d1), -163);
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2023-10-20").unwrap();
        assert_eq!(date, Date::from_ymd(2023, 10, 20).unwrap());
        assert!(Date::parse("20/10/2023").is_err());
        assert_eq!("2024-02-29".parse::<Date>().unwrap().day(), 29);
    }

    #[test]
    fn test_month_boundaries() {
        let date = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(date.start_of_month(), Date::from_ymd(2024, 2, 1).unwrap());
        assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(!date.is_end_of_month());
        assert!(date.end_of_month().is_end_of_month());
    }

    #[test]
    fn test_same_month() {
        let a = Date::from_ymd(2023, 10, 20).unwrap();
        let b = Date::from_ymd(2023, 10, 31).unwrap();
        let c = Date::from_ymd(2024, 10, 31).unwrap();
        assert!(a.same_month(&b));
        assert!(!a.same_month(&c));
    }

    #[test]
    fn test_iter_days_through() {
        let start = Date::from_ymd(2024, 2, 27).unwrap();
        let end = Date::from_ymd(2024, 3, 2).unwrap();
        let days: Vec<Date> = start.iter_days_through(end).collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[2], Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(*days.last().unwrap(), end);

        assert_eq!(end.iter_days_through(start).count(), 0);
        assert_eq!(start.iter_days_through(start).count(), 1);
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);
        assert_eq!((d2 - 5).day(), 6);
        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display_and_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(format!("{}", date), "2025-06-15");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
