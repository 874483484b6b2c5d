//! Rate command implementation.

use anyhow::Result;
use clap::Args;

use rsb_bonds::types::Term;

use crate::commands::{parse_date, Context, RateSourceArgs};
use crate::output::{format_percent, print_header, print_output, KeyValue};

/// Arguments for the rate command.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Start (issue) date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Term in years: 2, 3 or 5
    #[arg(short, long)]
    pub term: u32,

    #[command(flatten)]
    pub source: RateSourceArgs,
}

/// Execute the rate command.
pub fn execute(args: RateArgs, ctx: &Context) -> Result<()> {
    let start = parse_date(&args.start)?;
    let term = Term::try_from(args.term)?;
    let rates = args.source.source(ctx)?;
    let rate = rates.lookup_rate(start, term.years())?;

    if ctx.show_headers() {
        print_header("Published Rate");
    }
    let rows = vec![
        KeyValue::new("Start", start.to_string()),
        KeyValue::new("Term", term.to_string()),
        KeyValue::new("Rate", format_percent(rate)),
    ];
    print_output(&rows, ctx.format)?;

    Ok(())
}
