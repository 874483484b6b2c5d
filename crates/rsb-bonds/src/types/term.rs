//! Issued bond tenors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BondError;

/// Term of a savings bond in whole years.
///
/// Only the 2, 3 and 5 year tenors are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Term {
    /// 2-year bond
    TwoYear,
    /// 3-year bond
    ThreeYear,
    /// 5-year bond
    FiveYear,
}

impl Term {
    /// All issued terms, shortest first.
    pub const ALL: [Term; 3] = [Term::TwoYear, Term::ThreeYear, Term::FiveYear];

    /// Returns the term in years.
    #[must_use]
    pub const fn years(self) -> u32 {
        match self {
            Term::TwoYear => 2,
            Term::ThreeYear => 3,
            Term::FiveYear => 5,
        }
    }
}

impl TryFrom<u32> for Term {
    type Error = BondError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        match years {
            2 => Ok(Term::TwoYear),
            3 => Ok(Term::ThreeYear),
            5 => Ok(Term::FiveYear),
            _ => Err(BondError::InvalidTerm { years }),
        }
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> Self {
        term.years()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-year", self.years())
    }
}
