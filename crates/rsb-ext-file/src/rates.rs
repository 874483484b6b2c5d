//! CSV-backed published rate table.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use rsb_bonds::error::BondResult;
use rsb_bonds::rates::{PublishedRates, RateSource, RateTable};
use rsb_core::types::Date;

use crate::error::{FileError, FileResult};

// =============================================================================
// CSV RATE SOURCE
// =============================================================================

/// CSV record for one publication. Rates are quoted in percent.
#[derive(Debug, Deserialize)]
struct RateRecord {
    publish_date: String,
    rsb2: String,
    rsb3: String,
    rsb5: String,
}

/// Published rates loaded from a CSV file.
///
/// The file has a header row `publish_date,rsb2,rsb3,rsb5` (matched
/// case-insensitively) and one row per publication, for example
/// `2023-10-02,7.25,7.75,8.25`. Rates are converted from percent to
/// fractions. The first row for a month is used; later rows for the same
/// month are ignored.
#[derive(Debug, Clone)]
pub struct CsvRateSource {
    file_path: PathBuf,
    table: RateTable,
}

impl CsvRateSource {
    /// Loads a rate source from `file_path`.
    pub fn new(file_path: impl AsRef<Path>) -> FileResult<Self> {
        let mut source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            table: RateTable::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Re-reads the file, replacing the loaded table.
    pub fn reload(&mut self) -> FileResult<()> {
        self.table = load_rate_table(&self.file_path)?;
        Ok(())
    }

    /// Returns the file the rates were loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the loaded table.
    #[must_use]
    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

impl RateSource for CsvRateSource {
    fn lookup_rate(&self, start: Date, term_years: u32) -> BondResult<Decimal> {
        self.table.lookup_rate(start, term_years)
    }
}

/// Loads a published rate table from a CSV file.
pub fn load_rate_table(path: &Path) -> FileResult<RateTable> {
    let shown = path.display().to_string();
    if !path.exists() {
        return Err(FileError::NotFound { path: shown });
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| FileError::io(&shown, e.to_string()))?;

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| FileError::parse(&shown, 1, e.to_string()))?
        .iter()
        .map(str::to_ascii_lowercase)
        .collect();

    let mut table = RateTable::new();
    let mut rows = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            FileError::parse(&shown, line, e.to_string())
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: RateRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| FileError::parse(&shown, line, e.to_string()))?;

        let date = Date::parse(&row.publish_date).map_err(|_| {
            FileError::parse(
                &shown,
                line,
                format!("invalid publish_date '{}'", row.publish_date),
            )
        })?;
        let rates = PublishedRates::new(
            percent(&row.rsb2, "rsb2", &shown, line)?,
            percent(&row.rsb3, "rsb3", &shown, line)?,
            percent(&row.rsb5, "rsb5", &shown, line)?,
        );

        if !table.insert(date.year(), date.month(), rates) {
            debug!(path = %shown, line, %date, "ignoring later publication for month");
        }
        rows += 1;
    }

    info!(path = %shown, rows, months = table.len(), "loaded published rate table");
    Ok(table)
}

fn percent(value: &str, column: &str, path: &str, line: u64) -> FileResult<Decimal> {
    Decimal::from_str(value)
        .map(|pct| pct / Decimal::ONE_HUNDRED)
        .map_err(|_| FileError::parse(path, line, format!("invalid {column} rate '{value}'")))
}
