//! Domain types for savings bond analytics.
//!
//! - [`Date`]: Calendar date for bond calculations
//! - [`CashFlowEvent`]: Dated, signed cash flow with its kind
//! - [`CashFlowSchedule`]: Ordered sequence of events for one bond

mod cashflow;
mod date;

pub use cashflow::{CashFlowEvent, CashFlowKind, CashFlowSchedule};
pub use date::Date;
