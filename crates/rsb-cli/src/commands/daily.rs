//! Daily command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rsb_bonds::calculator::calculate_bond_metrics;
use rsb_bonds::valuation::DailyRecord;
use rsb_core::types::Date;

use crate::commands::{parse_date, BondArgs, Context};
use crate::error::CliError;
use crate::output::{format_amount, print_header, print_output, print_warning};

/// Arguments for the daily command.
#[derive(Args, Debug)]
pub struct DailyArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// First day to print (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to print (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// One day of the valuation series for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DailyRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Principal")]
    pub principal_balance: String,
    #[tabled(rename = "Coupon CF")]
    pub coupon_cash_flow: String,
    #[tabled(rename = "Principal CF")]
    pub principal_cash_flow: String,
    #[tabled(rename = "Accrued")]
    pub accrued_interest: String,
    #[tabled(rename = "Book Value")]
    pub book_value: String,
    #[tabled(rename = "Coupons Paid")]
    pub total_coupons_paid: String,
    #[tabled(rename = "Capitalised")]
    pub total_interest_capitalised: String,
}

impl DailyRow {
    /// Formats one record for display.
    pub fn new(record: &DailyRecord, precision: u32) -> Self {
        let amount = |v| format_amount(v, precision);
        Self {
            date: record.date.to_string(),
            principal_balance: amount(record.principal_balance),
            coupon_cash_flow: amount(record.coupon_cash_flow),
            principal_cash_flow: amount(record.principal_cash_flow),
            accrued_interest: amount(record.accrued_interest),
            book_value: amount(record.book_value),
            total_coupons_paid: amount(record.total_coupons_paid),
            total_interest_capitalised: amount(record.total_interest_capitalised),
        }
    }
}

/// Inclusive date window over the daily series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    from: Option<Date>,
    to: Option<Date>,
}

impl Window {
    /// Parses and validates the `--from` and `--to` bounds.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self> {
        let from = from.map(parse_date).transpose()?;
        let to = to.map(parse_date).transpose()?;
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(CliError::InvalidWindow {
                    from: f.to_string(),
                    to: t.to_string(),
                }
                .into());
            }
        }
        Ok(Self { from, to })
    }

    /// True when `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.from.map_or(true, |f| date >= f) && self.to.map_or(true, |t| date <= t)
    }
}

/// Execute the daily command.
pub fn execute(args: DailyArgs, ctx: &Context) -> Result<()> {
    let window = Window::parse(args.from.as_deref(), args.to.as_deref())?;
    let holding = args.bond.holding()?;
    let rates = args.bond.rate.source(ctx)?;
    let metrics = calculate_bond_metrics(&holding, rates.as_ref())?;

    if metrics.is_empty() && !ctx.quiet {
        print_warning(&format!(
            "{} bonds are not calculated; nothing to show",
            holding.kind
        ));
    }

    let rows: Vec<DailyRow> = metrics
        .daily
        .iter()
        .filter(|r| window.contains(r.date))
        .map(|r| DailyRow::new(r, ctx.precision))
        .collect();

    if ctx.show_headers() {
        print_header(&format!("Daily Valuation: {}", holding.reference));
    }
    print_output(&rows, ctx.format)?;

    Ok(())
}
