//! # RSB Bonds
//!
//! Cash-flow schedules and daily valuation for fixed-rate retail savings bonds.
//!
//! This crate provides:
//!
//! - **Types**: `Term`, `PaymentType`, `BondKind`
//! - **Instruments**: `BondSpec` and its builder
//! - **Cash Flows**: coupon date enumeration and the `ScheduleGenerator`
//!   (deferred first period, full-period vs. ACT/365 stub interest,
//!   compounding for reinvestment bonds)
//! - **Valuation**: the `DailyValuationBuilder` and the capitalisation view
//! - **Rates**: the `RateSource` seam and an in-memory `RateTable`
//! - **Calculator**: bond-kind dispatch from a holding to its metrics
//!
//! ## Example
//!
//! ```rust
//! use rsb_bonds::prelude::*;
//! use rsb_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let spec = BondSpecBuilder::new()
//!     .start(Date::from_ymd(2023, 10, 20).unwrap())
//!     .term(Term::ThreeYear)
//!     .payment_type(PaymentType::SemiAnnual)
//!     .principal(dec!(1000000))
//!     .rate(dec!(0.0775))
//!     .build()
//!     .unwrap();
//!
//! let schedule = ScheduleGenerator::generate(&spec).unwrap();
//! let daily = DailyValuationBuilder::build(&spec, &schedule);
//!
//! assert_eq!(daily.last().unwrap().date, spec.maturity());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::needless_pass_by_value)]

pub mod calculator;
pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod rates;
pub mod types;
pub mod valuation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{calculate_bond_metrics, BondHolding, BondMetrics};
    pub use crate::cashflows::{generate_schedule, ScheduleGenerator};
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{BondSpec, BondSpecBuilder};
    pub use crate::rates::{FixedRate, PublishedRates, RateSource, RateTable};
    pub use crate::types::{BondKind, PaymentType, Term};
    pub use crate::valuation::{
        build_daily_series, capitalisation_schedule, CapitalisationRow, DailyRecord,
        DailyValuationBuilder,
    };
}

pub use error::{BondError, BondResult};
