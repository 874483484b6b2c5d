//! RSB CLI - Retail savings bond cash flows from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Cash flow schedule at a fixed rate
//! rsb schedule --start 2023-10-20 --term 3 --payment semi_annual --principal 1000000 --rate 9
//!
//! # Daily valuation for one month, rate from the published table
//! rsb daily -s 2023-10-20 -t 2 -p monthly --principal 10000 --rates rsb_rates.csv \
//!     --from 2024-03-01 --to 2024-03-31
//!
//! # Capitalisation schedule of a reinvest bond
//! rsb capitalisation -s 2023-10-20 -t 5 -p reinvest --principal 50000 -r 7.75
//!
//! # Compare payment types
//! rsb scenarios -s 2023-10-20 -t 3 --principal 100000 --rates rsb_rates.csv --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    let ctx = Context::new(cli.format, cli.quiet, config);

    match cli.command {
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Daily(args) => commands::daily::execute(args, &ctx)?,
        Commands::Capitalisation(args) => commands::capitalisation::execute(args, &ctx)?,
        Commands::Rate(args) => commands::rate::execute(args, &ctx)?,
        Commands::Scenarios(args) => commands::scenarios::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(quiet: bool) {
    let default = if quiet { "error" } else { "warn,rsb=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
