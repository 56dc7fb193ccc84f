use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::PlannerError;
use crate::types::{Percent, Rate};
use crate::PlannerResult;

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Convert an annual rate in percent to the effective monthly compounding
/// rate: i = (1 + r/100)^(1/12) - 1.
///
/// Rates at or below -100% make the fractional power undefined and are
/// rejected.
pub fn monthly_rate(annual_rate_pct: Percent) -> PlannerResult<Rate> {
    if annual_rate_pct.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let base = Decimal::ONE + annual_rate_pct / HUNDRED;
    if base <= Decimal::ZERO {
        return Err(PlannerError::InvalidRate(format!(
            "annual rate {annual_rate_pct}% is at or below -100%, monthly compounding is undefined"
        )));
    }
    Ok(base.powd(Decimal::ONE / MONTHS_PER_YEAR) - Decimal::ONE)
}

/// (1 + i)^n via iterative multiplication (avoids Decimal::powd drift).
pub(crate) fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}
