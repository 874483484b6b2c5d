//! Lifecycle cash flow schedule generation.

use rust_decimal::Decimal;
use tracing::debug;

use rsb_core::daycounts::Act365Fixed;
use rsb_core::types::{CashFlowEvent, CashFlowSchedule, Date};

use super::schedule::CouponSchedule;
use crate::error::BondResult;
use crate::instruments::{BondSpec, BondSpecBuilder};
use crate::types::{PaymentType, Term};

/// Generates the full cash flow schedule of a savings bond.
///
/// The schedule opens with the principal investment (a negative amount) on
/// the start date and closes with the principal repayment at maturity.
/// In between sits one interest event per coupon date:
///
/// - A gap inside the full-period band pays `principal * rate / n`
///   (`n` = 2 or 12); any other gap accrues ACT/365.
/// - If the first coupon date closes the start date's own period, nothing
///   is paid on it. Its ACT/365 stub is added to the next payment.
/// - Reinvestment bonds capitalise each amount into the running principal
///   and pay the capitalised total as a coupon at maturity.
pub struct ScheduleGenerator;

/// State carried through the coupon fold.
struct Accrual {
    /// First day of the period the next event covers.
    period_start: Date,
    /// Date the next day count is measured from.
    last_date: Date,
    /// Principal earning interest, grows for reinvestment bonds.
    principal: Decimal,
    /// Stub interest waiting for the next payment.
    deferred: Decimal,
    events: Vec<CashFlowEvent>,
}

impl Accrual {
    fn new(spec: &BondSpec) -> Self {
        Self {
            period_start: spec.start(),
            last_date: spec.start(),
            principal: spec.principal(),
            deferred: Decimal::ZERO,
            events: Vec::new(),
        }
    }

    fn deferred_to(spec: &BondSpec, skipped: Date) -> Self {
        let days = spec.start().days_between(&skipped);
        Self {
            last_date: skipped,
            deferred: Act365Fixed.interest(spec.principal(), spec.rate(), days),
            ..Self::new(spec)
        }
    }

    fn step(mut self, spec: &BondSpec, date: Date) -> Self {
        let days = self.last_date.days_between(&date);
        let amount = period_interest(spec.payment_type(), self.principal, spec.rate(), days)
            + std::mem::take(&mut self.deferred);

        let kind = spec.payment_type().interest_kind();
        self.events.push(
            CashFlowEvent::new(date, amount, kind).with_accrual(self.period_start, date),
        );

        if spec.payment_type().is_reinvest() {
            self.principal += amount;
        }
        self.period_start = date;
        self.last_date = date;
        self
    }
}

impl ScheduleGenerator {
    /// Generates the schedule for a bond, sorted by date.
    pub fn generate(spec: &BondSpec) -> BondResult<CashFlowSchedule> {
        let coupons = CouponSchedule::generate(spec.start(), spec.maturity(), spec.payment_type())?;
        let deferred = coupons.defers_first_period()?;

        let (paid_dates, initial) = match coupons.dates() {
            [skipped, rest @ ..] if deferred => (rest, Accrual::deferred_to(spec, *skipped)),
            all => (all, Accrual::new(spec)),
        };

        let accrual = paid_dates
            .iter()
            .fold(initial, |acc, &date| acc.step(spec, date));
        let capitalised = accrual.principal - spec.principal();

        let mut schedule = CashFlowSchedule::with_capacity(accrual.events.len() + 3);
        schedule.push(CashFlowEvent::investment(spec.start(), spec.principal()));
        for event in accrual.events {
            schedule.push(event);
        }
        schedule.push(CashFlowEvent::repayment(spec.maturity(), spec.principal()));
        if spec.payment_type().is_reinvest() && capitalised > Decimal::ZERO {
            schedule.push(CashFlowEvent::coupon(spec.maturity(), capitalised));
        }
        schedule.sort_by_date();

        debug!(
            reference = spec.reference(),
            payment_type = %spec.payment_type(),
            events = schedule.len(),
            deferred_first_period = deferred,
            "generated cash flow schedule"
        );

        Ok(schedule)
    }
}

/// Interest for one period of `days` on `principal`.
fn period_interest(payment_type: PaymentType, principal: Decimal, rate: Decimal, days: i64) -> Decimal {
    if payment_type.full_period_days().contains(&days) {
        principal * rate / Decimal::from(payment_type.periods_per_year())
    } else {
        Act365Fixed.interest(principal, rate, days)
    }
}

/// Generates a schedule from raw inputs.
///
/// Rejects terms other than 2, 3 or 5 years with `InvalidTerm` and unknown
/// payment types with `InvalidPaymentType` before any computation.
///
/// # Example
///
/// ```rust
/// use rsb_bonds::cashflows::generate_schedule;
/// use rsb_core::types::{CashFlowKind, Date};
/// use rust_decimal_macros::dec;
///
/// let start = Date::from_ymd(2023, 10, 20).unwrap();
/// let schedule = generate_schedule(start, 3, "monthly", dec!(1000000), dec!(0.0775)).unwrap();
///
/// assert_eq!(schedule.as_slice()[0].kind(), CashFlowKind::PrincipalInvestment);
/// assert!(generate_schedule(start, 4, "monthly", dec!(1000000), dec!(0.0775)).is_err());
/// ```
pub fn generate_schedule(
    start: Date,
    term_years: u32,
    payment_type: &str,
    principal: Decimal,
    rate: Decimal,
) -> BondResult<CashFlowSchedule> {
    let term = Term::try_from(term_years)?;
    let payment_type: PaymentType = payment_type.parse()?;
    let spec = BondSpecBuilder::new()
        .start(start)
        .term(term)
        .payment_type(payment_type)
        .principal(principal)
        .rate(rate)
        .build()?;
    ScheduleGenerator::generate(&spec)
}
