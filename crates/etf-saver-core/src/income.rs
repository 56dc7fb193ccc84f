use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::PlannerError;
use crate::types::{Money, Percent};
use crate::PlannerResult;

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly dividend income from a principal at an annual yield:
/// income = principal * (yield/100) / 12.
pub fn monthly_income(principal: Money, annual_yield_pct: Percent) -> Money {
    principal * (annual_yield_pct / HUNDRED) / MONTHS_PER_YEAR
}

/// Principal required to produce a target monthly dividend:
/// principal = target * 12 / (yield/100). No principal produces positive
/// income at a non-positive yield.
pub fn required_principal(
    target_monthly_income: Money,
    annual_yield_pct: Percent,
) -> PlannerResult<Money> {
    if annual_yield_pct <= Decimal::ZERO {
        return Err(PlannerError::InvalidRate(format!(
            "dividend yield must be greater than zero, got {annual_yield_pct}%"
        )));
    }
    Ok(target_monthly_income * MONTHS_PER_YEAR / (annual_yield_pct / HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ---------------------------------------------------------------
    // 1. Concrete scenario: 20k/month at 4% needs 6,000,000
    // ---------------------------------------------------------------
    #[test]
    fn test_required_principal_concrete() {
        let principal = required_principal(dec!(20_000), dec!(4)).unwrap();
        assert_eq!(principal, dec!(6_000_000));
    }

    // ---------------------------------------------------------------
    // 2. Monthly income from 6M at 4% is 20k
    // ---------------------------------------------------------------
    #[test]
    fn test_monthly_income_concrete() {
        assert_eq!(monthly_income(dec!(6_000_000), dec!(4)), dec!(20_000));
    }

    // ---------------------------------------------------------------
    // 3. Round-trip: monthly_income(required_principal(X, y), y) ≈ X
    // ---------------------------------------------------------------
    #[test]
    fn test_round_trip() {
        for (target, yield_pct) in [
            (dec!(20_000), dec!(4)),
            (dec!(1_234.56), dec!(2.5)),
            (dec!(50_000), dec!(3.3)),
        ] {
            let principal = required_principal(target, yield_pct).unwrap();
            let income = monthly_income(principal, yield_pct);
            let diff = (income - target).abs();
            assert!(diff < dec!(0.0000001), "target={} income={}", target, income);
        }
    }

    // ---------------------------------------------------------------
    // 4. Zero or negative yield cannot fund a target
    // ---------------------------------------------------------------
    #[test]
    fn test_non_positive_yield_rejected() {
        assert!(matches!(
            required_principal(dec!(10_000), Decimal::ZERO),
            Err(PlannerError::InvalidRate(_))
        ));
        assert!(matches!(
            required_principal(dec!(10_000), dec!(-1)),
            Err(PlannerError::InvalidRate(_))
        ));
    }

    // ---------------------------------------------------------------
    // 5. Zero principal yields zero income
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_principal() {
        assert_eq!(monthly_income(Decimal::ZERO, dec!(5)), Decimal::ZERO);
    }
}
