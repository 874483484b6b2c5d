//! Interest payment types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rsb_core::types::CashFlowKind;

use crate::error::BondError;

/// How a savings bond delivers its interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Coupons paid on March 31 and September 30
    SemiAnnual,
    /// Coupons paid on the last day of every month
    Monthly,
    /// Interest capitalised on March 31 and September 30, repaid at maturity
    Reinvest,
}

impl PaymentType {
    /// All payment types.
    pub const ALL: [PaymentType; 3] = [
        PaymentType::SemiAnnual,
        PaymentType::Monthly,
        PaymentType::Reinvest,
    ];

    /// Returns the canonical identifier (`semi_annual`, `monthly`, `reinvest`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentType::SemiAnnual => "semi_annual",
            PaymentType::Monthly => "monthly",
            PaymentType::Reinvest => "reinvest",
        }
    }

    /// Returns the number of interest periods per year.
    #[must_use]
    pub const fn periods_per_year(self) -> u32 {
        match self {
            PaymentType::SemiAnnual | PaymentType::Reinvest => 2,
            PaymentType::Monthly => 12,
        }
    }

    /// Day gaps treated as a full period and paid at `rate / periods_per_year`.
    ///
    /// Any other gap accrues ACT/365.
    #[must_use]
    pub const fn full_period_days(self) -> RangeInclusive<i64> {
        match self {
            PaymentType::SemiAnnual | PaymentType::Reinvest => 180..=185,
            PaymentType::Monthly => 28..=31,
        }
    }

    /// Returns true if coupon dates fall on month ends.
    #[must_use]
    pub const fn is_monthly(self) -> bool {
        matches!(self, PaymentType::Monthly)
    }

    /// Returns true if interest compounds into principal.
    #[must_use]
    pub const fn is_reinvest(self) -> bool {
        matches!(self, PaymentType::Reinvest)
    }

    /// Event kind emitted on each interest date.
    #[must_use]
    pub const fn interest_kind(self) -> CashFlowKind {
        match self {
            PaymentType::SemiAnnual | PaymentType::Monthly => CashFlowKind::Coupon,
            PaymentType::Reinvest => CashFlowKind::Capitalisation,
        }
    }

    /// Returns true if a short first period is deferred into the next payment.
    ///
    /// Reinvestment bonds capitalise their first stub on its own date.
    #[must_use]
    pub const fn defers_first_period(self) -> bool {
        !self.is_reinvest()
    }
}

impl FromStr for PaymentType {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "semi_annual" => Ok(PaymentType::SemiAnnual),
            "monthly" => Ok(PaymentType::Monthly),
            "reinvest" => Ok(PaymentType::Reinvest),
            _ => Err(BondError::InvalidPaymentType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("semi_annual".parse::<PaymentType>().unwrap(), PaymentType::SemiAnnual);
        assert_eq!("Semi-Annual".parse::<PaymentType>().unwrap(), PaymentType::SemiAnnual);
        assert_eq!(" MONTHLY ".parse::<PaymentType>().unwrap(), PaymentType::Monthly);
        assert_eq!("reinvest".parse::<PaymentType>().unwrap(), PaymentType::Reinvest);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "quarterly".parse::<PaymentType>().unwrap_err();
        assert_eq!(
            err,
            BondError::InvalidPaymentType {
                value: "quarterly".to_string()
            }
        );
    }

    #[test]
    fn test_display_round_trip() {
        for pt in PaymentType::ALL {
            assert_eq!(pt.to_string().parse::<PaymentType>().unwrap(), pt);
        }
    }

    #[test]
    fn test_full_period_bounds() {
        let semi = PaymentType::SemiAnnual.full_period_days();
        assert!(semi.contains(&180) && semi.contains(&185));
        assert!(!semi.contains(&179) && !semi.contains(&186));

        let monthly = PaymentType::Monthly.full_period_days();
        assert!(monthly.contains(&28) && monthly.contains(&31));
        assert!(!monthly.contains(&27) && !monthly.contains(&32));
    }

    #[test]
    fn test_interest_kind() {
        assert_eq!(PaymentType::Monthly.interest_kind(), CashFlowKind::Coupon);
        assert_eq!(PaymentType::Reinvest.interest_kind(), CashFlowKind::Capitalisation);
        assert!(!PaymentType::Reinvest.defers_first_period());
        assert!(PaymentType::SemiAnnual.defers_first_period());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&PaymentType::SemiAnnual).unwrap();
        assert_eq!(json, "\"semi_annual\"");
    }
}
