//! # RSB Core
//!
//! Core types and conventions for the RSB retail savings bond engine.
//!
//! This crate provides the foundational building blocks used by the
//! schedule generator and the daily valuation builder:
//!
//! - **Types**: `Date`, `CashFlowEvent`, `CashFlowKind`, `CashFlowSchedule`
//! - **Day Count Conventions**: ACT/365 Fixed accrual used for stub periods
//!   and daily interest
//!
//! ## Example
//!
//! ```rust
//! use rsb_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2023, 10, 20).unwrap();
//! let event = CashFlowEvent::investment(start, dec!(1000000));
//! assert_eq!(event.kind(), CashFlowKind::PrincipalInvestment);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlowEvent, CashFlowKind, CashFlowSchedule, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlowEvent, CashFlowKind, CashFlowSchedule, Date};
