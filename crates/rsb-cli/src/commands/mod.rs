//! CLI command implementations.

pub mod capitalisation;
pub mod daily;
pub mod rate;
pub mod scenarios;
pub mod schedule;

pub use capitalisation::CapitalisationArgs;
pub use daily::DailyArgs;
pub use rate::RateArgs;
pub use scenarios::ScenariosArgs;
pub use schedule::ScheduleArgs;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use rsb_bonds::calculator::BondHolding;
use rsb_bonds::rates::{FixedRate, RateSource};
use rsb_bonds::types::{BondKind, PaymentType, Term};
use rsb_core::types::Date;
use rsb_ext_file::CsvRateSource;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub format: OutputFormat,
    /// Decimal places for amounts
    pub precision: u32,
    /// Suppress headers and notices
    pub quiet: bool,
    /// Rate table from the config file
    pub rates_file: Option<PathBuf>,
}

impl Context {
    /// Builds the context from the parsed flags and the loaded config.
    pub fn new(format: Option<OutputFormat>, quiet: bool, config: CliConfig) -> Self {
        Self {
            format: format.unwrap_or(config.default_format),
            precision: config.precision,
            quiet,
            rates_file: config.rates_file,
        }
    }

    /// True when section headers should be printed.
    pub fn show_headers(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }
}

/// Where the bond's rate comes from.
#[derive(Args, Debug, Clone)]
pub struct RateSourceArgs {
    /// Annual rate in percent (e.g. 7.75), overrides the rate table
    #[arg(short, long)]
    pub rate: Option<Decimal>,

    /// Published rate table (CSV: publish_date,rsb2,rsb3,rsb5)
    #[arg(long, env = "RSB_RATES_FILE")]
    pub rates: Option<PathBuf>,
}

impl RateSourceArgs {
    /// Resolves the rate source: `--rate`, then `--rates`, then the config.
    pub fn source(&self, ctx: &Context) -> Result<Box<dyn RateSource>> {
        if let Some(pct) = self.rate {
            return Ok(Box::new(FixedRate(parse_percent(pct)?)));
        }

        let path = self
            .rates
            .clone()
            .or_else(|| ctx.rates_file.clone())
            .ok_or(CliError::MissingRateSource)?;
        info!("Loading rates from {}", path.display());
        Ok(Box::new(CsvRateSource::new(&path)?))
    }
}

/// Inputs describing one bond holding.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Start (issue) date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Term in years: 2, 3 or 5
    #[arg(short, long)]
    pub term: u32,

    /// Payment type: semi_annual, monthly or reinvest
    #[arg(short, long, default_value = "semi_annual")]
    pub payment: String,

    /// Principal invested
    #[arg(long)]
    pub principal: Decimal,

    /// Holding identifier
    #[arg(long, default_value = "CLI")]
    pub reference: String,

    /// Bond kind: fixed, inflation or top-up
    #[arg(long, default_value = "fixed")]
    pub kind: String,

    #[command(flatten)]
    pub rate: RateSourceArgs,
}

impl BondArgs {
    /// Validates the inputs into a holding.
    pub fn holding(&self) -> Result<BondHolding> {
        let start = parse_date(&self.start)?;
        let term = Term::try_from(self.term)?;
        let payment_type: PaymentType = self.payment.parse()?;
        let kind: BondKind = self.kind.parse()?;

        Ok(BondHolding::fixed_rate(
            self.reference.clone(),
            start,
            term,
            payment_type,
            self.principal,
        )
        .with_kind(kind))
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Converts a percent rate into a fraction.
pub fn parse_percent(pct: Decimal) -> CliResult<Decimal> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(CliError::InvalidRate(pct.to_string()));
    }
    Ok(pct / Decimal::ONE_HUNDRED)
}
