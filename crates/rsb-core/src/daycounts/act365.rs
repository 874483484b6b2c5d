//! Actual/365 Fixed day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates and the year
/// basis is always 365 days, leap years included.
///
/// # Formula
///
/// $$\text{Interest} = \text{Principal} \times \text{Rate} \times \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl Act365Fixed {
    /// Year basis in days.
    pub const BASIS: i64 = 365;

    /// Simple interest on `principal` at annual `rate` over `days` days.
    ///
    /// Evaluated as `principal * rate * days / 365` so results are
    /// reproducible term for term.
    #[must_use]
    pub fn interest(&self, principal: Decimal, rate: Decimal, days: i64) -> Decimal {
        principal * rate * Decimal::from(days) / Decimal::from(Self::BASIS)
    }

    /// Simple interest accrued from `start` (exclusive) to `end` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DayCountError` if `end` is before `start`.
    pub fn interest_between(
        &self,
        principal: Decimal,
        rate: Decimal,
        start: Date,
        end: Date,
    ) -> CoreResult<Decimal> {
        if end < start {
            return Err(CoreError::day_count(format!(
                "accrual end {end} is before start {start}"
            )));
        }
        Ok(self.interest(principal, rate, self.day_count(start, end)))
    }
}

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(Self::BASIS)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
