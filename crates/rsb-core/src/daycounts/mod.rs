//! Day count conventions for savings bond accrual.
//!
//! Day count conventions determine how interest accrues over a span of
//! calendar days. The retail savings bond engine uses two rules:
//!
//! - Full coupon periods pay a fixed fraction of the annual rate
//!   (1/2 for semi-annual, 1/12 for monthly). That rule lives with the
//!   payment types in `rsb-bonds`.
//! - Everything else (stub periods, deferred first periods and daily
//!   accrual) uses [`Act365Fixed`].
//!
//! # Usage
//!
//! ```rust
//! use rsb_core::daycounts::{Act365Fixed, DayCount};
//! use rsb_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2023, 10, 20).unwrap();
//! let end = Date::from_ymd(2023, 10, 31).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 11);
//! let interest = dc.interest(dec!(1000000), dec!(0.0775), 11);
//! assert!(interest > dec!(2335) && interest < dec!(2336));
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so schedules can be
/// generated for independent bonds in parallel.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/365F").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
