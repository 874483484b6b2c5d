//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::commands::{CapitalisationArgs, DailyArgs, RateArgs, ScenariosArgs, ScheduleArgs};

/// RSB - Retail savings bond cash flows and daily valuation
#[derive(Parser)]
#[command(name = "rsb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, else table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "RSB_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the lifecycle cash flow schedule of a bond
    Schedule(ScheduleArgs),

    /// Print the daily valuation series of a bond
    Daily(DailyArgs),

    /// Print the capitalisation schedule of a reinvestment bond
    Capitalisation(CapitalisationArgs),

    /// Print the published rate for a start date and term
    Rate(RateArgs),

    /// Run the semi-annual, monthly and reinvest variants of one bond
    Scenarios(ScenariosArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (tab-separated values)
    Minimal,
}
