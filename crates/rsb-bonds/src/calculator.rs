//! Bond-kind dispatch from a holding to its metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rsb_core::types::{CashFlowSchedule, Date};

use crate::cashflows::ScheduleGenerator;
use crate::error::BondResult;
use crate::instruments::{BondSpec, BondSpecBuilder};
use crate::rates::RateSource;
use crate::types::{BondKind, PaymentType, Term};
use crate::valuation::{DailyRecord, DailyValuationBuilder};

/// A savings bond holding before its rate is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondHolding {
    /// Holding identifier
    pub reference: String,
    /// Product kind
    pub kind: BondKind,
    /// Issue date
    pub start: Date,
    /// Term
    pub term: Term,
    /// Payment type
    pub payment_type: PaymentType,
    /// Principal invested
    pub principal: Decimal,
}

impl BondHolding {
    /// Creates a fixed-rate holding.
    #[must_use]
    pub fn fixed_rate(
        reference: impl Into<String>,
        start: Date,
        term: Term,
        payment_type: PaymentType,
        principal: Decimal,
    ) -> Self {
        Self {
            reference: reference.into(),
            kind: BondKind::FixedRate,
            start,
            term,
            payment_type,
            principal,
        }
    }

    /// Sets the product kind.
    #[must_use]
    pub fn with_kind(mut self, kind: BondKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds the bond spec for this holding at `rate`.
    pub fn to_spec(&self, rate: Decimal) -> BondResult<BondSpec> {
        BondSpecBuilder::new()
            .reference(self.reference.clone())
            .start(self.start)
            .term(self.term)
            .payment_type(self.payment_type)
            .principal(self.principal)
            .rate(rate)
            .build()
    }
}

/// Everything calculated for one holding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondMetrics {
    /// Resolved annual rate, absent when nothing was calculated
    pub rate: Option<Decimal>,
    /// Lifecycle cash flows
    pub cash_flows: CashFlowSchedule,
    /// Daily valuation series
    pub daily: Vec<DailyRecord>,
}

impl BondMetrics {
    /// Metrics for a holding that could not be calculated.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if nothing was calculated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty() && self.daily.is_empty()
    }
}

/// Calculates cash flows and the daily series for a holding.
///
/// The rate is resolved once from `rates`; lookup errors are returned as-is.
/// Inflation-linked and top-up holdings are not calculated and give empty
/// metrics.
///
/// # Example
///
/// ```rust
/// use rsb_bonds::calculator::{calculate_bond_metrics, BondHolding};
/// use rsb_bonds::rates::FixedRate;
/// use rsb_bonds::types::{PaymentType, Term};
/// use rsb_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let holding = BondHolding::fixed_rate(
///     "H1",
///     Date::from_ymd(2023, 10, 20).unwrap(),
///     Term::TwoYear,
///     PaymentType::Monthly,
///     dec!(10000),
/// );
/// let metrics = calculate_bond_metrics(&holding, &FixedRate(dec!(0.0725))).unwrap();
/// assert_eq!(metrics.rate, Some(dec!(0.0725)));
/// assert!(!metrics.daily.is_empty());
/// ```
pub fn calculate_bond_metrics(
    holding: &BondHolding,
    rates: &dyn RateSource,
) -> BondResult<BondMetrics> {
    match holding.kind {
        BondKind::FixedRate => {
            let rate = rates.lookup_rate(holding.start, holding.term.years())?;
            debug!(reference = %holding.reference, %rate, "resolved published rate");

            let spec = holding.to_spec(rate)?;
            let cash_flows = ScheduleGenerator::generate(&spec)?;
            let daily = DailyValuationBuilder::build(&spec, &cash_flows);

            Ok(BondMetrics {
                rate: Some(rate),
                cash_flows,
                daily,
            })
        }
        BondKind::InflationLinked | BondKind::TopUp => {
            warn!(
                reference = %holding.reference,
                kind = %holding.kind,
                "calculation not implemented for bond kind"
            );
            Ok(BondMetrics::empty())
        }
    }
}
