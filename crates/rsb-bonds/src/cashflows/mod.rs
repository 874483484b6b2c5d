//! Cash flow generation for savings bonds.

mod generator;
mod schedule;

pub use generator::{generate_schedule, ScheduleGenerator};
pub use schedule::{semi_annual_period_end, CouponSchedule};
