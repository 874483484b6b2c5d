//! Scenarios command implementation.
//!
//! Runs one investment through every payment type, then prints a
//! comparison followed by each schedule.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use rsb_bonds::calculator::{calculate_bond_metrics, BondHolding, BondMetrics};
use rsb_bonds::types::{PaymentType, Term};
use rsb_core::types::CashFlowKind;

use crate::cli::OutputFormat;
use crate::commands::schedule::{event_rows, EventRow};
use crate::commands::{parse_date, Context, RateSourceArgs};
use crate::output::{format_amount, format_percent, print_header, print_output};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Start (issue) date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Term in years: 2, 3 or 5
    #[arg(short, long)]
    pub term: u32,

    /// Principal invested
    #[arg(long)]
    pub principal: Decimal,

    /// Prefix for the holding identifiers
    #[arg(long, default_value = "SCENARIO")]
    pub reference: String,

    #[command(flatten)]
    pub source: RateSourceArgs,
}

/// One variant with its schedule, for JSON output.
#[derive(Debug, Serialize)]
struct ScenarioReport {
    #[serde(flatten)]
    summary: ScenarioRow,
    events: Vec<EventRow>,
}

/// One payment type's outcome.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ScenarioRow {
    #[tabled(rename = "Payment Type")]
    pub payment_type: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Maturity")]
    pub maturity: String,
    #[tabled(rename = "Coupons Paid")]
    pub coupons_paid: String,
    #[tabled(rename = "Capitalised")]
    pub interest_capitalised: String,
    #[tabled(rename = "Repayment")]
    pub repayment: String,
    #[tabled(rename = "Events")]
    pub events: usize,
}

impl ScenarioRow {
    fn new(holding: &BondHolding, metrics: &BondMetrics, precision: u32) -> Self {
        let schedule = &metrics.cash_flows;
        Self {
            payment_type: holding.payment_type.to_string(),
            rate: metrics.rate.map(format_percent).unwrap_or_default(),
            maturity: schedule
                .as_slice()
                .last()
                .map(|cf| cf.date().to_string())
                .unwrap_or_default(),
            coupons_paid: format_amount(schedule.total_of(CashFlowKind::Coupon), precision),
            interest_capitalised: format_amount(
                schedule.total_of(CashFlowKind::Capitalisation),
                precision,
            ),
            repayment: format_amount(
                schedule.total_of(CashFlowKind::PrincipalRepayment),
                precision,
            ),
            events: schedule.len(),
        }
    }
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, ctx: &Context) -> Result<()> {
    let start = parse_date(&args.start)?;
    let term = Term::try_from(args.term)?;
    let rates = args.source.source(ctx)?;

    let mut outcomes = Vec::with_capacity(PaymentType::ALL.len());
    for payment_type in PaymentType::ALL {
        let holding = BondHolding::fixed_rate(
            format!("{}_{}", args.reference, payment_type.as_str().to_uppercase()),
            start,
            term,
            payment_type,
            args.principal,
        );
        let metrics = calculate_bond_metrics(&holding, rates.as_ref())?;
        outcomes.push((holding, metrics));
    }

    let rows: Vec<ScenarioRow> = outcomes
        .iter()
        .map(|(holding, metrics)| ScenarioRow::new(holding, metrics, ctx.precision))
        .collect();

    if ctx.format == OutputFormat::Json {
        let reports: Vec<ScenarioReport> = rows
            .into_iter()
            .zip(&outcomes)
            .map(|(summary, (_, metrics))| ScenarioReport {
                summary,
                events: event_rows(&metrics.cash_flows, ctx.precision),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if ctx.show_headers() {
        print_header(&format!("Scenarios: {} {}", start, term));
    }
    print_output(&rows, ctx.format)?;

    for (holding, metrics) in &outcomes {
        if ctx.show_headers() {
            print_header(&format!("Cash Flow Schedule: {}", holding.reference));
        }
        print_output(&event_rows(&metrics.cash_flows, ctx.precision), ctx.format)?;
    }

    Ok(())
}
