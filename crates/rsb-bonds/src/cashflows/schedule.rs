//! Coupon date enumeration for savings bonds.
//!
//! Interest dates are fixed calendar dates, not anniversaries of the start
//! date:
//! - Semi-annual and reinvestment bonds use March 31 and September 30
//! - Monthly bonds use the last day of each month
//!
//! Only dates strictly after the start and on or before maturity are kept.
//! Maturity is appended when it is not already the last date.
//!
//! # Example
//!
//! ```rust
//! use rsb_bonds::cashflows::CouponSchedule;
//! use rsb_bonds::types::PaymentType;
//! use rsb_core::types::Date;
//!
//! let start = Date::from_ymd(2023, 10, 20).unwrap();
//! let maturity = Date::from_ymd(2026, 10, 20).unwrap();
//! let schedule = CouponSchedule::generate(start, maturity, PaymentType::SemiAnnual).unwrap();
//!
//! assert_eq!(schedule.dates()[0], Date::from_ymd(2024, 3, 31).unwrap());
//! assert_eq!(*schedule.dates().last().unwrap(), maturity);
//! ```

use rsb_core::types::Date;

use crate::error::{BondError, BondResult};
use crate::types::PaymentType;

/// Enumerated interest dates for one bond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponSchedule {
    start: Date,
    maturity: Date,
    payment_type: PaymentType,
    dates: Vec<Date>,
}

impl CouponSchedule {
    /// Enumerates the interest dates between `start` and `maturity`.
    pub fn generate(start: Date, maturity: Date, payment_type: PaymentType) -> BondResult<Self> {
        if maturity <= start {
            return Err(BondError::schedule_failed(format!(
                "maturity {maturity} is not after start {start}"
            )));
        }

        let candidates = if payment_type.is_monthly() {
            month_ends(start, maturity)?
        } else {
            semi_annual_anchors(start, maturity)?
        };

        let mut dates: Vec<Date> = candidates
            .into_iter()
            .filter(|d| *d > start && *d <= maturity)
            .collect();

        if dates.last().map_or(true, |last| *last < maturity) {
            dates.push(maturity);
        }

        Ok(Self {
            start,
            maturity,
            payment_type,
            dates,
        })
    }

    /// Returns the interest dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the start date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Iterates `(period_start, period_end)` pairs, the first starting on
    /// the start date.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        std::iter::once(self.start)
            .chain(self.dates.iter().copied())
            .zip(self.dates.iter().copied())
    }

    /// Returns the number of interest dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no interest dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns true if the first interest date closes the same payment
    /// period the start date falls in.
    pub fn first_date_in_start_period(&self) -> BondResult<bool> {
        let Some(first) = self.dates.first() else {
            return Ok(false);
        };

        if self.payment_type.is_monthly() {
            Ok(first.same_month(&self.start))
        } else {
            Ok(semi_annual_period_end(*first)? == semi_annual_period_end(self.start)?)
        }
    }

    /// Returns true if the first period's interest is carried into the
    /// second interest date instead of being paid on its own.
    ///
    /// Needs at least two dates so there is a payment to carry into.
    pub fn defers_first_period(&self) -> BondResult<bool> {
        if !self.payment_type.defers_first_period() || self.dates.len() < 2 {
            return Ok(false);
        }
        self.first_date_in_start_period()
    }
}

/// Returns the last day of the semi-annual period containing `date`.
///
/// Periods run April 1 to September 30 and October 1 to March 31.
pub fn semi_annual_period_end(date: Date) -> BondResult<Date> {
    let end = match date.month() {
        1..=3 => Date::from_ymd(date.year(), 3, 31)?,
        4..=9 => Date::from_ymd(date.year(), 9, 30)?,
        _ => Date::from_ymd(date.year() + 1, 3, 31)?,
    };
    Ok(end)
}

/// March 31 and September 30 of every year from the start year through the
/// year after maturity.
fn semi_annual_anchors(start: Date, maturity: Date) -> BondResult<Vec<Date>> {
    let years = start.year()..=maturity.year() + 1;
    let mut anchors = Vec::with_capacity(2 * years.clone().count());
    for year in years {
        anchors.push(Date::from_ymd(year, 3, 31)?);
        anchors.push(Date::from_ymd(year, 9, 30)?);
    }
    Ok(anchors)
}

/// Last day of every month from the start month through the maturity month.
fn month_ends(start: Date, maturity: Date) -> BondResult<Vec<Date>> {
    let mut ends = Vec::new();
    let mut month = start.start_of_month();
    while month <= maturity {
        ends.push(month.end_of_month());
        month = month.add_months(1)?;
    }
    Ok(ends)
}
