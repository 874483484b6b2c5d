//! Capitalisation command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rsb_bonds::calculator::calculate_bond_metrics;
use rsb_bonds::valuation::{capitalisation_schedule, CapitalisationRow};

use crate::commands::{BondArgs, Context};
use crate::output::{format_amount, print_header, print_output, print_warning};

/// Arguments for the capitalisation command.
#[derive(Args, Debug)]
pub struct CapitalisationArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// One capitalisation for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CapitalisationDisplay {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Principal Before")]
    pub principal_before: String,
    #[tabled(rename = "Interest Capitalised")]
    pub interest_capitalised: String,
    #[tabled(rename = "Principal After")]
    pub principal_after: String,
}

impl CapitalisationDisplay {
    fn new(row: &CapitalisationRow, precision: u32) -> Self {
        Self {
            date: row.date.to_string(),
            principal_before: format_amount(row.principal_before, precision),
            interest_capitalised: format_amount(row.interest_capitalised, precision),
            principal_after: format_amount(row.principal_after, precision),
        }
    }
}

/// Execute the capitalisation command.
pub fn execute(args: CapitalisationArgs, ctx: &Context) -> Result<()> {
    let holding = args.bond.holding()?;
    if !holding.payment_type.is_reinvest() && !ctx.quiet {
        print_warning(&format!(
            "{} bonds pay their interest out; only reinvest bonds capitalise",
            holding.payment_type
        ));
    }

    let rates = args.bond.rate.source(ctx)?;
    let metrics = calculate_bond_metrics(&holding, rates.as_ref())?;
    let rows: Vec<CapitalisationDisplay> =
        capitalisation_schedule(&metrics.cash_flows, &metrics.daily)
            .iter()
            .map(|r| CapitalisationDisplay::new(r, ctx.precision))
            .collect();

    if ctx.show_headers() {
        print_header(&format!("Capitalisation Schedule: {}", holding.reference));
    }
    print_output(&rows, ctx.format)?;

    Ok(())
}
