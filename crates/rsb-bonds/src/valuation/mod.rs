//! Daily valuation and the reinvestment capitalisation view.

mod capitalisation;
mod daily;

pub use capitalisation::{capitalisation_schedule, CapitalisationRow};
pub use daily::{build_daily_series, DailyRecord, DailyValuationBuilder};
