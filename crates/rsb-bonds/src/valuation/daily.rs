//! Day-by-day valuation of a savings bond.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rsb_core::daycounts::Act365Fixed;
use rsb_core::types::{CashFlowKind, CashFlowSchedule, Date};

use crate::error::BondResult;
use crate::instruments::{BondSpec, BondSpecBuilder};
use crate::types::{PaymentType, Term};

/// Valuation of a bond on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day
    pub date: Date,
    /// Principal outstanding at the end of the day
    pub principal_balance: Decimal,
    /// Coupons paid on the day
    pub coupon_cash_flow: Decimal,
    /// Principal repaid on the day
    pub principal_cash_flow: Decimal,
    /// Interest accrued since the last coupon or capitalisation date
    pub accrued_interest: Decimal,
    /// Principal balance plus accrued interest
    pub book_value: Decimal,
    /// Running total of coupons paid
    pub total_coupons_paid: Decimal,
    /// Interest capitalised into principal so far
    pub total_interest_capitalised: Decimal,
}

/// Cash flows falling on one day, collapsed by kind.
#[derive(Debug, Clone, Copy, Default)]
struct DayFlows {
    invested: Decimal,
    capitalised: Decimal,
    coupons: Decimal,
    repaid: Decimal,
    resets_accrual: bool,
}

/// Builds the daily valuation series from a generated schedule.
///
/// One record is produced per calendar day from start to maturity
/// inclusive. Accrued interest on a day is the previous day's principal
/// balance times the rate times the days since the last coupon or
/// capitalisation date, over 365. On maturity the balance, accrued interest
/// and book value are all zero.
pub struct DailyValuationBuilder;

impl DailyValuationBuilder {
    /// Builds the series for `spec` from its cash flow `schedule`.
    ///
    /// Returns an empty series for an empty schedule.
    #[must_use]
    pub fn build(spec: &BondSpec, schedule: &CashFlowSchedule) -> Vec<DailyRecord> {
        if schedule.is_empty() || spec.principal() <= Decimal::ZERO {
            return Vec::new();
        }

        let flows = collapse_by_day(schedule);
        let principal = spec.principal();
        let rate = spec.rate();
        let reinvest = spec.payment_type().is_reinvest();
        let maturity = spec.maturity();

        // (balance so far, last accrual reset, previous day's balance, coupons paid)
        let initial = (
            if reinvest { Decimal::ZERO } else { principal },
            spec.start(),
            principal,
            Decimal::ZERO,
        );

        let records: Vec<DailyRecord> = spec
            .start()
            .iter_days_through(maturity)
            .scan(initial, |state, date| {
                let (balance, last_reset, previous_balance, coupons_paid) = state;
                let day = flows.get(&date).copied().unwrap_or_default();

                if reinvest {
                    *balance += day.invested.abs() + day.capitalised.abs();
                }
                if day.resets_accrual {
                    *last_reset = date;
                }
                *coupons_paid += day.coupons;

                let days = last_reset.days_between(&date);
                let accrued = Act365Fixed.interest(*previous_balance, rate, days);
                let capitalised = if reinvest {
                    *balance - principal
                } else {
                    Decimal::ZERO
                };

                let record = if date == maturity {
                    DailyRecord {
                        date,
                        principal_balance: Decimal::ZERO,
                        coupon_cash_flow: day.coupons,
                        principal_cash_flow: day.repaid,
                        accrued_interest: Decimal::ZERO,
                        book_value: Decimal::ZERO,
                        total_coupons_paid: *coupons_paid,
                        total_interest_capitalised: capitalised,
                    }
                } else {
                    DailyRecord {
                        date,
                        principal_balance: *balance,
                        coupon_cash_flow: day.coupons,
                        principal_cash_flow: day.repaid,
                        accrued_interest: accrued,
                        book_value: *balance + accrued,
                        total_coupons_paid: *coupons_paid,
                        total_interest_capitalised: capitalised,
                    }
                };

                *previous_balance = *balance;
                Some(record)
            })
            .collect();

        debug!(
            reference = spec.reference(),
            days = records.len(),
            "built daily valuation series"
        );

        records
    }
}

fn collapse_by_day(schedule: &CashFlowSchedule) -> BTreeMap<Date, DayFlows> {
    let mut flows: BTreeMap<Date, DayFlows> = BTreeMap::new();
    for event in schedule {
        let day = flows.entry(event.date()).or_default();
        match event.kind() {
            CashFlowKind::PrincipalInvestment => day.invested += event.amount(),
            CashFlowKind::Capitalisation => day.capitalised += event.amount(),
            CashFlowKind::Coupon => day.coupons += event.amount(),
            CashFlowKind::PrincipalRepayment => day.repaid += event.amount(),
        }
        day.resets_accrual |= event.is_interest();
    }
    flows
}

/// Builds the daily series from raw inputs and a schedule.
///
/// An empty schedule or a non-positive principal yields an empty series.
/// Otherwise the term and payment type are validated as for
/// [`generate_schedule`](crate::cashflows::generate_schedule).
pub fn build_daily_series(
    start: Date,
    term_years: u32,
    payment_type: &str,
    principal: Decimal,
    rate: Decimal,
    schedule: &CashFlowSchedule,
) -> BondResult<Vec<DailyRecord>> {
    if schedule.is_empty() || principal <= Decimal::ZERO {
        return Ok(Vec::new());
    }

    let term = Term::try_from(term_years)?;
    let payment_type: PaymentType = payment_type.parse()?;
    let spec = BondSpecBuilder::new()
        .start(start)
        .term(term)
        .payment_type(payment_type)
        .principal(principal)
        .rate(rate)
        .build()?;

    Ok(DailyValuationBuilder::build(&spec, schedule))
}
