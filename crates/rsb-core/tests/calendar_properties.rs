//! Property-based tests for the calendar and day count primitives.
//!
//! These are the invariants the schedule generator leans on:
//! - Year arithmetic never moves a date out of its month
//! - Day iteration covers exactly `days_between + 1` days
//! - Month ends are the last valid day of the month
//! - ACT/365 interest is linear in the number of days

use proptest::prelude::*;
use rsb_core::daycounts::{Act365Fixed, DayCount};
use rsb_core::types::Date;
use rust_decimal::Decimal;

fn any_date() -> impl Strategy<Value = Date> {
    (2000i32..2040, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        let first = Date::from_ymd(y, m, 1).unwrap();
        Date::from_ymd(y, m, d.min(first.days_in_month())).unwrap()
    })
}

proptest! {
    #[test]
    fn add_years_keeps_month(date in any_date(), years in 1i32..=5) {
        let shifted = date.add_years(years).unwrap();
        prop_assert_eq!(shifted.month(), date.month());
        prop_assert_eq!(shifted.year(), date.year() + years);
        prop_assert!(shifted.day() <= date.day());
    }

    #[test]
    fn iter_days_covers_span(start in any_date(), span in 0i64..2000) {
        let end = start.add_days(span);
        let days: Vec<Date> = start.iter_days_through(end).collect();
        prop_assert_eq!(days.len() as i64, start.days_between(&end) + 1);
        prop_assert_eq!(days.first().copied(), Some(start));
        prop_assert_eq!(days.last().copied(), Some(end));
        prop_assert!(days.windows(2).all(|w| w[0].days_between(&w[1]) == 1));
    }

    #[test]
    fn end_of_month_is_last_day(date in any_date()) {
        let eom = date.end_of_month();
        prop_assert!(eom.is_end_of_month());
        prop_assert!(eom.same_month(&date));
        prop_assert_eq!(eom.add_days(1).day(), 1);
    }

    #[test]
    fn act365_interest_is_additive(a in 0i64..400, b in 0i64..400) {
        let dc = Act365Fixed;
        let principal = Decimal::from(365_000);
        let rate = Decimal::new(10, 2);
        let joint = dc.interest(principal, rate, a + b);
        let split = dc.interest(principal, rate, a) + dc.interest(principal, rate, b);
        prop_assert_eq!(joint, split);
    }
}

#[test]
fn act365_day_count_matches_calendar() {
    let dc = Act365Fixed;
    let start = Date::from_ymd(2024, 3, 31).unwrap();
    let end = Date::from_ymd(2024, 9, 30).unwrap();
    assert_eq!(dc.day_count(start, end), 183);
    assert_eq!(start.days_between(&end), 183);
}
