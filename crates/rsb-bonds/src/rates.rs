//! Published fixed-rate lookup.
//!
//! Savings bonds take the rate published for the month they are issued in.
//! A [`RateSource`] resolves that rate once per calculation; the engine never
//! caches or retries it.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rsb_core::types::Date;

use crate::error::{BondError, BondResult};
use crate::types::Term;

/// Source of published fixed rates.
pub trait RateSource: Send + Sync {
    /// Returns the annual rate (as a fraction) for a bond starting on
    /// `start` with the given term.
    ///
    /// Fails with `UnsupportedTerm` for a term that is not quoted and with
    /// `RateNotFound` when nothing is published for the start month.
    fn lookup_rate(&self, start: Date, term_years: u32) -> BondResult<Decimal>;
}

/// Rates published for one month, one per term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedRates {
    /// 2-year rate
    pub two_year: Decimal,
    /// 3-year rate
    pub three_year: Decimal,
    /// 5-year rate
    pub five_year: Decimal,
}

impl PublishedRates {
    /// Creates a set of published rates.
    #[must_use]
    pub fn new(two_year: Decimal, three_year: Decimal, five_year: Decimal) -> Self {
        Self {
            two_year,
            three_year,
            five_year,
        }
    }

    /// Returns the rate for `term`.
    #[must_use]
    pub fn for_term(&self, term: Term) -> Decimal {
        match term {
            Term::TwoYear => self.two_year,
            Term::ThreeYear => self.three_year,
            Term::FiveYear => self.five_year,
        }
    }
}

/// In-memory table of published rates keyed by (year, month).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<(i32, u32), PublishedRates>,
}

impl RateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the rates published for a month.
    ///
    /// The first entry for a month wins; returns false if the month was
    /// already present.
    pub fn insert(&mut self, year: i32, month: u32, rates: PublishedRates) -> bool {
        match self.rates.entry((year, month)) {
            Entry::Vacant(slot) => {
                slot.insert(rates);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the rates published for a month.
    #[must_use]
    pub fn get(&self, year: i32, month: u32) -> Option<&PublishedRates> {
        self.rates.get(&(year, month))
    }

    /// Returns the number of months in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates months in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, u32), &PublishedRates)> {
        self.rates.iter().map(|(k, v)| (*k, v))
    }
}

impl RateSource for RateTable {
    fn lookup_rate(&self, start: Date, term_years: u32) -> BondResult<Decimal> {
        let term = quoted_term(term_years)?;
        self.get(start.year(), start.month())
            .map(|rates| rates.for_term(term))
            .ok_or(BondError::RateNotFound {
                year: start.year(),
                month: start.month(),
                term_years,
            })
    }
}

/// A single rate applied to every start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRate(pub Decimal);

impl RateSource for FixedRate {
    fn lookup_rate(&self, _start: Date, term_years: u32) -> BondResult<Decimal> {
        quoted_term(term_years)?;
        Ok(self.0)
    }
}

fn quoted_term(term_years: u32) -> BondResult<Term> {
    Term::try_from(term_years).map_err(|_| BondError::UnsupportedTerm { years: term_years })
}
