//! Cash flow events for the savings bond lifecycle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Kind of cash flow event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Initial purchase of the bond (negative amount)
    PrincipalInvestment,
    /// Interest paid out to the holder
    Coupon,
    /// Interest added to principal instead of being paid out
    Capitalisation,
    /// Return of the original principal at maturity
    PrincipalRepayment,
}

impl CashFlowKind {
    /// Ordering rank for events sharing a date: investment first, then
    /// interest events, then repayment.
    #[must_use]
    pub const fn tie_rank(self) -> u8 {
        match self {
            CashFlowKind::PrincipalInvestment => 0,
            CashFlowKind::Coupon | CashFlowKind::Capitalisation => 1,
            CashFlowKind::PrincipalRepayment => 2,
        }
    }

    /// Returns true for events that reset interest accrual.
    #[must_use]
    pub const fn is_interest(self) -> bool {
        matches!(self, CashFlowKind::Coupon | CashFlowKind::Capitalisation)
    }
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::PrincipalInvestment => "Principal Investment",
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::Capitalisation => "Capitalisation",
            CashFlowKind::PrincipalRepayment => "Principal Repayment",
        };
        write!(f, "{name}")
    }
}

/// A dated, signed cash flow event.
///
/// Interest events carry the accrual period they cover so the day count
/// behind each amount can be audited.
///
/// # Example
///
/// ```rust
/// use rsb_core::types::{CashFlowEvent, CashFlowKind, Date};
/// use rust_decimal_macros::dec;
///
/// let start = Date::from_ymd(2023, 10, 20).unwrap();
/// let cf = CashFlowEvent::investment(start, dec!(1000000));
/// assert_eq!(cf.amount(), dec!(-1000000));
/// assert_eq!(cf.kind(), CashFlowKind::PrincipalInvestment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowEvent {
    /// Event date
    date: Date,
    /// Signed amount (negative for the investment)
    amount: Decimal,
    /// Event kind
    kind: CashFlowKind,
    /// Accrual period start date (interest events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accrual_start: Option<Date>,
    /// Accrual period end date (interest events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accrual_end: Option<Date>,
}

impl CashFlowEvent {
    /// Creates a new event with basic fields.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, kind: CashFlowKind) -> Self {
        Self {
            date,
            amount,
            kind,
            accrual_start: None,
            accrual_end: None,
        }
    }

    /// Creates the principal investment event. The stored amount is negative.
    #[must_use]
    pub fn investment(date: Date, principal: Decimal) -> Self {
        Self::new(date, -principal.abs(), CashFlowKind::PrincipalInvestment)
    }

    /// Creates a coupon event.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowKind::Coupon)
    }

    /// Creates a capitalisation event.
    #[must_use]
    pub fn capitalisation(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowKind::Capitalisation)
    }

    /// Creates the principal repayment event.
    #[must_use]
    pub fn repayment(date: Date, principal: Decimal) -> Self {
        Self::new(date, principal, CashFlowKind::PrincipalRepayment)
    }

    /// Sets the accrual period for this event.
    #[must_use]
    pub fn with_accrual(mut self, start: Date, end: Date) -> Self {
        self.accrual_start = Some(start);
        self.accrual_end = Some(end);
        self
    }

    /// Returns the event date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> CashFlowKind {
        self.kind
    }

    /// Returns the accrual period start date, if any.
    #[must_use]
    pub fn accrual_start(&self) -> Option<Date> {
        self.accrual_start
    }

    /// Returns the accrual period end date, if any.
    #[must_use]
    pub fn accrual_end(&self) -> Option<Date> {
        self.accrual_end
    }

    /// Returns true for coupon and capitalisation events.
    #[must_use]
    pub fn is_interest(&self) -> bool {
        self.kind.is_interest()
    }
}

impl fmt::Display for CashFlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.kind)
    }
}

/// An ordered schedule of cash flow events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    events: Vec<CashFlowEvent>,
}

impl CashFlowSchedule {
    /// Creates a new empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Adds an event to the schedule.
    pub fn push(&mut self, event: CashFlowEvent) {
        self.events.push(event);
    }

    /// Returns the events as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlowEvent] {
        &self.events
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over the events.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlowEvent> {
        self.events.iter()
    }

    /// Returns the signed total of all events.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.events.iter().map(|cf| cf.amount).sum()
    }

    /// Returns the total of all events of one kind.
    #[must_use]
    pub fn total_of(&self, kind: CashFlowKind) -> Decimal {
        self.of_kind(kind).map(|cf| cf.amount).sum()
    }

    /// Iterates the events of one kind.
    pub fn of_kind(&self, kind: CashFlowKind) -> impl Iterator<Item = &CashFlowEvent> {
        self.events.iter().filter(move |cf| cf.kind == kind)
    }

    /// Iterates the events falling on `date`.
    pub fn on(&self, date: Date) -> impl Iterator<Item = &CashFlowEvent> {
        self.events.iter().filter(move |cf| cf.date == date)
    }

    /// Sorts events by date, then investment / interest / repayment.
    ///
    /// The sort is stable, so events of equal rank on the same date keep
    /// their insertion order.
    pub fn sort_by_date(&mut self) {
        self.events.sort_by_key(|cf| (cf.date, cf.kind.tie_rank()));
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlowEvent;
    type IntoIter = std::vec::IntoIter<CashFlowEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlowEvent;
    type IntoIter = std::slice::Iter<'a, CashFlowEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<CashFlowEvent> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlowEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
