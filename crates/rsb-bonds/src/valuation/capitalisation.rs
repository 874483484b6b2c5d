//! Reinvestment view: principal before and after each capitalisation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rsb_core::types::{CashFlowKind, CashFlowSchedule, Date};

use super::DailyRecord;

/// One capitalisation of interest into principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalisationRow {
    /// Capitalisation date
    pub date: Date,
    /// Principal before the interest was added
    pub principal_before: Decimal,
    /// Interest added to principal
    pub interest_capitalised: Decimal,
    /// Principal after the interest was added
    pub principal_after: Decimal,
}

/// Lists every capitalisation in `schedule` with the principal either side.
///
/// Balances come from the daily series. The maturity balance is zeroed
/// there, so the row on maturity is rebuilt from the previous day's balance.
/// Payout bonds have no capitalisations and give an empty list.
#[must_use]
pub fn capitalisation_schedule(
    schedule: &CashFlowSchedule,
    daily: &[DailyRecord],
) -> Vec<CapitalisationRow> {
    let Some(first) = daily.first() else {
        return Vec::new();
    };
    let original_principal = schedule
        .of_kind(CashFlowKind::PrincipalInvestment)
        .map(|cf| cf.amount().abs())
        .sum::<Decimal>();
    let last_index = daily.len() - 1;

    schedule
        .of_kind(CashFlowKind::Capitalisation)
        .filter_map(|event| {
            let offset = usize::try_from(first.date.days_between(&event.date())).ok()?;
            let record = daily.get(offset)?;
            let principal_before = offset
                .checked_sub(1)
                .and_then(|i| daily.get(i))
                .map_or(original_principal, |r| r.principal_balance);
            let principal_after = if offset == last_index {
                principal_before + event.amount()
            } else {
                record.principal_balance
            };

            Some(CapitalisationRow {
                date: event.date(),
                principal_before,
                interest_capitalised: event.amount(),
                principal_after,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::ScheduleGenerator;
    use crate::instruments::BondSpecBuilder;
    use crate::types::{PaymentType, Term};
    use crate::valuation::DailyValuationBuilder;
    use rust_decimal_macros::dec;

    fn rows(payment_type: PaymentType) -> Vec<CapitalisationRow> {
        let spec = BondSpecBuilder::new()
            .start(Date::from_ymd(2023, 10, 20).unwrap())
            .term(Term::ThreeYear)
            .payment_type(payment_type)
            .principal(dec!(1000000))
            .rate(dec!(0.0775))
            .build()
            .unwrap();
        let schedule = ScheduleGenerator::generate(&spec).unwrap();
        let daily = DailyValuationBuilder::build(&spec, &schedule);
        capitalisation_schedule(&schedule, &daily)
    }

    #[test]
    fn test_rows_chain() {
        let rows = rows(PaymentType::Reinvest);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].principal_before, dec!(1000000));
        for row in &rows {
            assert_eq!(row.principal_before + row.interest_capitalised, row.principal_after);
        }
        for pair in rows.windows(2) {
            assert_eq!(pair[0].principal_after, pair[1].principal_before);
        }
    }

    #[test]
    fn test_maturity_row_rebuilt() {
        let rows = rows(PaymentType::Reinvest);
        let last = rows.last().unwrap();
        assert_eq!(last.date, Date::from_ymd(2026, 10, 20).unwrap());
        assert!(last.principal_after > dec!(1000000));
    }

    #[test]
    fn test_payout_is_empty() {
        assert!(rows(PaymentType::SemiAnnual).is_empty());
        assert!(capitalisation_schedule(&CashFlowSchedule::new(), &[]).is_empty());
    }
}
