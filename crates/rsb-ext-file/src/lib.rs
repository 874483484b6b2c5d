//! # RSB Ext File
//!
//! File-based data sources for the RSB savings bond engine.
//!
//! This crate provides the CSV-backed published rate table consumed through
//! the [`RateSource`](rsb_bonds::rates::RateSource) trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod rates;

pub use error::{FileError, FileResult};
pub use rates::{load_rate_table, CsvRateSource};
