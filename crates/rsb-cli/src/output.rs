//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV with a header row.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one tab-separated line per row, no header.
fn print_minimal<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", item.fields().join("\t"));
    }
    Ok(())
}

/// Formats an amount rounded half away from zero to `precision` places.
pub fn format_amount(value: Decimal, precision: u32) -> String {
    format!(
        "{:.prec$}",
        value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero),
        prec = precision as usize
    )
}

/// Formats a rate fraction as a percentage string.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", (value * Decimal::ONE_HUNDRED).normalize())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from an amount.
    pub fn from_amount(key: impl Into<String>, value: Decimal, precision: u32) -> Self {
        Self::new(key, format_amount(value, precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds_and_pads() {
        assert_eq!(format_amount(Decimal::new(3460958904, 5), 2), "34609.59");
        assert_eq!(format_amount(Decimal::from(1_000_000), 2), "1000000.00");
        assert_eq!(format_amount(Decimal::new(-15, 1), 0), "-2");
        assert_eq!(format_amount(Decimal::new(25, 3), 2), "0.03");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Decimal::new(775, 4)), "7.75%");
        assert_eq!(format_percent(Decimal::new(9, 2)), "9%");
    }
}
