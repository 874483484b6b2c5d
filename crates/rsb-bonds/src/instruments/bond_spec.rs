//! Savings bond specification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rsb_core::types::Date;

use crate::error::{BondError, BondResult};
use crate::types::{PaymentType, Term};

/// Immutable description of a single savings bond holding.
///
/// Maturity is derived from the start date and term when the spec is built.
/// A February 29 start rolls back to February 28 in a non-leap maturity year.
///
/// # Example
///
/// ```rust
/// use rsb_bonds::instruments::BondSpec;
/// use rsb_bonds::types::{PaymentType, Term};
/// use rsb_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let spec = BondSpec::builder()
///     .reference("RSB-2023-10")
///     .start(Date::from_ymd(2023, 10, 20).unwrap())
///     .term(Term::ThreeYear)
///     .payment_type(PaymentType::Monthly)
///     .principal(dec!(1000000))
///     .rate(dec!(0.0775))
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.maturity(), Date::from_ymd(2026, 10, 20).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSpec {
    reference: String,
    start: Date,
    maturity: Date,
    term: Term,
    payment_type: PaymentType,
    principal: Decimal,
    rate: Decimal,
}

impl BondSpec {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> BondSpecBuilder {
        BondSpecBuilder::default()
    }

    /// Returns the holding identifier.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the issue (start) date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the term.
    #[must_use]
    pub fn term(&self) -> Term {
        self.term
    }

    /// Returns the payment type.
    #[must_use]
    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    /// Returns the original principal.
    #[must_use]
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// Returns the annual fixed rate as a fraction.
    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Number of calendar days from start to maturity.
    #[must_use]
    pub fn tenor_days(&self) -> i64 {
        self.start.days_between(&self.maturity)
    }
}

/// Builder for `BondSpec`.
#[derive(Debug, Clone, Default)]
pub struct BondSpecBuilder {
    reference: Option<String>,
    start: Option<Date>,
    term: Option<Term>,
    payment_type: Option<PaymentType>,
    principal: Option<Decimal>,
    rate: Option<Decimal>,
}

impl BondSpecBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the holding identifier.
    ///
    /// Defaults to `BOND_{term}YR_{PAYMENT}`.
    #[must_use]
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the term.
    #[must_use]
    pub fn term(mut self, term: Term) -> Self {
        self.term = Some(term);
        self
    }

    /// Sets the payment type.
    #[must_use]
    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    /// Sets the principal.
    #[must_use]
    pub fn principal(mut self, principal: Decimal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Sets the annual rate as a fraction (e.g. 0.0775).
    #[must_use]
    pub fn rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Builds the spec.
    pub fn build(self) -> BondResult<BondSpec> {
        let start = self.start.ok_or_else(|| BondError::missing_field("start"))?;
        let term = self.term.ok_or_else(|| BondError::missing_field("term"))?;
        let payment_type = self
            .payment_type
            .ok_or_else(|| BondError::missing_field("payment_type"))?;
        let principal = self
            .principal
            .ok_or_else(|| BondError::missing_field("principal"))?;
        let rate = self.rate.ok_or_else(|| BondError::missing_field("rate"))?;

        if principal <= Decimal::ZERO {
            return Err(BondError::invalid_spec("principal must be positive"));
        }
        if rate < Decimal::ZERO {
            return Err(BondError::invalid_spec("rate cannot be negative"));
        }

        let maturity = start.add_years(term.years() as i32)?;
        let reference = self.reference.unwrap_or_else(|| {
            format!(
                "BOND_{}YR_{}",
                term.years(),
                payment_type.as_str().to_ascii_uppercase()
            )
        });

        Ok(BondSpec {
            reference,
            start,
            maturity,
            term,
            payment_type,
            principal,
            rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn builder() -> BondSpecBuilder {
        BondSpecBuilder::new()
            .start(Date::from_ymd(2023, 10, 20).unwrap())
            .term(Term::ThreeYear)
            .payment_type(PaymentType::SemiAnnual)
            .principal(dec!(1000000))
            .rate(dec!(0.0775))
    }

    #[test]
    fn test_build() {
        let spec = builder().reference("X1").build().unwrap();
        assert_eq!(spec.reference(), "X1");
        assert_eq!(spec.maturity(), Date::from_ymd(2026, 10, 20).unwrap());
        assert_eq!(spec.tenor_days(), 1096);
    }

    #[test]
    fn test_default_reference() {
        let spec = builder().payment_type(PaymentType::Reinvest).build().unwrap();
        assert_eq!(spec.reference(), "BOND_3YR_REINVEST");
    }

    #[test]
    fn test_missing_fields() {
        let err = BondSpecBuilder::new().build().unwrap_err();
        assert_eq!(err, BondError::missing_field("start"));

        let err = builder().rate(dec!(0.05)).principal(dec!(0)).build().unwrap_err();
        assert!(matches!(err, BondError::InvalidSpec { .. }));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = builder().rate(dec!(-0.01)).build().unwrap_err();
        assert!(err.to_string().contains("rate cannot be negative"));
    }

    #[test]
    fn test_leap_day_maturity_clamps() {
        let spec = builder()
            .start(Date::from_ymd(2024, 2, 29).unwrap())
            .build()
            .unwrap();
        assert_eq!(spec.maturity(), Date::from_ymd(2027, 2, 28).unwrap());
    }
}
