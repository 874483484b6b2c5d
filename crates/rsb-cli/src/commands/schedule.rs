//! Schedule command implementation.
//!
//! Prints the lifecycle cash flows of one bond.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rsb_bonds::calculator::{calculate_bond_metrics, BondHolding, BondMetrics};
use rsb_core::types::{CashFlowEvent, CashFlowKind, CashFlowSchedule};

use crate::commands::{BondArgs, Context};
use crate::output::{format_amount, format_percent, print_header, print_output, print_warning, KeyValue};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Print a summary table after the schedule
    #[arg(long)]
    pub summary: bool,
}

/// One schedule row for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EventRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Accrual Start")]
    pub accrual_start: String,
    #[tabled(rename = "Accrual End")]
    pub accrual_end: String,
}

impl EventRow {
    /// Formats an event for display.
    pub fn new(event: &CashFlowEvent, precision: u32) -> Self {
        Self {
            date: event.date().to_string(),
            kind: event.kind().to_string(),
            amount: format_amount(event.amount(), precision),
            accrual_start: event.accrual_start().map(|d| d.to_string()).unwrap_or_default(),
            accrual_end: event.accrual_end().map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

/// Formats every event of a schedule.
pub fn event_rows(schedule: &CashFlowSchedule, precision: u32) -> Vec<EventRow> {
    schedule.iter().map(|cf| EventRow::new(cf, precision)).collect()
}

/// Headline figures for a calculated bond.
pub fn summary_rows(holding: &BondHolding, metrics: &BondMetrics, precision: u32) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("Reference", holding.reference.clone()),
        KeyValue::new("Payment Type", holding.payment_type.to_string()),
        KeyValue::new("Start", holding.start.to_string()),
        KeyValue::new("Term", holding.term.to_string()),
    ];
    if let Some(rate) = metrics.rate {
        rows.push(KeyValue::new("Rate", format_percent(rate)));
    }
    rows.push(KeyValue::from_amount("Principal", holding.principal, precision));

    let schedule = &metrics.cash_flows;
    if let Some(last) = schedule.as_slice().last() {
        rows.push(KeyValue::new("Maturity", last.date().to_string()));
    }
    rows.push(KeyValue::from_amount(
        "Coupons Paid",
        schedule.total_of(CashFlowKind::Coupon),
        precision,
    ));
    rows.push(KeyValue::from_amount(
        "Interest Capitalised",
        schedule.total_of(CashFlowKind::Capitalisation),
        precision,
    ));
    rows.push(KeyValue::new("Events", schedule.len().to_string()));
    rows
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let holding = args.bond.holding()?;
    let rates = args.bond.rate.source(ctx)?;
    let metrics = calculate_bond_metrics(&holding, rates.as_ref())?;

    if metrics.is_empty() && !ctx.quiet {
        print_warning(&format!(
            "{} bonds are not calculated; nothing to show",
            holding.kind
        ));
    }

    if ctx.show_headers() {
        print_header(&format!("Cash Flow Schedule: {}", holding.reference));
    }
    print_output(&event_rows(&metrics.cash_flows, ctx.precision), ctx.format)?;

    if args.summary && !metrics.is_empty() {
        if ctx.show_headers() {
            print_header("Summary");
        }
        print_output(&summary_rows(&holding, &metrics, ctx.precision), ctx.format)?;
    }

    Ok(())
}
