//! Savings bond product kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BondError;

/// Product kind of a savings bond holding.
///
/// Only fixed-rate bonds are valued; the other kinds are recognised so a
/// holding list can carry them, but they produce no cash flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BondKind {
    /// Fixed coupon for the whole term
    #[default]
    FixedRate,
    /// Coupon linked to an inflation index
    InflationLinked,
    /// Top-up issue of an existing bond
    TopUp,
}

impl BondKind {
    /// Returns true if schedules can be generated for this kind.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, BondKind::FixedRate)
    }
}

impl FromStr for BondKind {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "fixed" | "fixedrate" => Ok(BondKind::FixedRate),
            "inflation" | "inflationlinked" => Ok(BondKind::InflationLinked),
            "topup" => Ok(BondKind::TopUp),
            _ => Err(BondError::invalid_spec(format!("unknown bond kind '{s}'"))),
        }
    }
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BondKind::FixedRate => "Fixed Rate",
            BondKind::InflationLinked => "Inflation Linked",
            BondKind::TopUp => "Top-Up",
        };
        write!(f, "{name}")
    }
}
