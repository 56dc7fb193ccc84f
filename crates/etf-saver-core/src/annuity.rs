use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::rates::{self, compound};
use crate::types::{
    with_metadata, ComputationOutput, ContributionPlan, Money, Percent, Rate, SeriesPoint, Timing,
};
use crate::PlannerResult;

/// Result of projecting a contribution plan forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulationOutput {
    pub end_value: Money,
    pub total_contributions: Money,
    pub investment_gain: Money,
    /// Balance at the end of each month, 0..=months. Feeds the line chart
    /// and the CSV schedule export.
    pub schedule: Vec<SeriesPoint>,
}

/// Annuity factor ((1+i)^n - 1) / i, with the n-period limit at i = 0 and the
/// annuity-due multiplier folded in. At i = 0 timing carries no compounding
/// advantage, so the multiplier stays 1 regardless.
fn annuity_factor(i: Rate, n: u32, timing: Timing) -> Decimal {
    if i.is_zero() {
        return Decimal::from(n);
    }
    let factor = (compound(i, n) - Decimal::ONE) / i;
    match timing {
        Timing::EndOfPeriod => factor,
        Timing::BeginningOfPeriod => factor * (Decimal::ONE + i),
    }
}

/// Future value of an initial principal plus a level monthly contribution:
/// FV = PV * (1+i)^n + PMT * factor. The due multiplier applies to the
/// contribution stream only, never to the principal term.
pub fn future_value(pv: Money, pmt: Money, i: Rate, n: u32, timing: Timing) -> Money {
    pv * compound(i, n) + pmt * annuity_factor(i, n, timing)
}

/// Monthly contribution required to reach `fv_target` from `pv` in n months:
/// PMT = (FV_target - PV * (1+i)^n) / factor.
pub fn solve_payment(
    pv: Money,
    fv_target: Money,
    i: Rate,
    n: u32,
    timing: Timing,
) -> PlannerResult<Money> {
    let factor = annuity_factor(i, n, timing);
    if factor.is_zero() {
        return Err(PlannerError::DegenerateSolve(
            "annuity factor is zero (no contribution periods); no finite payment reaches the target"
                .into(),
        ));
    }
    Ok((fv_target - pv * compound(i, n)) / factor)
}

/// Month-by-month balance curve for a contribution plan, months 0..=n.
///
/// Each point is recomputed independently from the closed form rather than
/// rolled forward, so truncating or restarting the iterator never changes
/// the values it yields.
pub fn growth_schedule(
    pv: Money,
    pmt: Money,
    i: Rate,
    n: u32,
    timing: Timing,
) -> impl Iterator<Item = SeriesPoint> + Clone {
    (0..=n).map(move |month| SeriesPoint {
        month,
        value: future_value(pv, pmt, i, month, timing),
    })
}

/// Project a contribution plan at an annual percentage return.
pub fn project(
    plan: &ContributionPlan,
    annual_return_pct: Percent,
) -> PlannerResult<ComputationOutput<AccumulationOutput>> {
    let i = rates::monthly_rate(annual_return_pct)?;
    let warnings: Vec<String> = Vec::new();

    let end_value = future_value(
        plan.initial_principal,
        plan.monthly_amount,
        i,
        plan.months,
        plan.timing,
    );
    let schedule: Vec<SeriesPoint> = growth_schedule(
        plan.initial_principal,
        plan.monthly_amount,
        i,
        plan.months,
        plan.timing,
    )
    .collect();

    let total_contributions =
        plan.initial_principal + plan.monthly_amount * Decimal::from(plan.months);
    let output = AccumulationOutput {
        end_value,
        total_contributions,
        investment_gain: end_value - total_contributions,
        schedule,
    };

    Ok(with_metadata(
        "Periodic investment accumulation (closed-form annuity with monthly compounding)",
        &serde_json::json!({
            "annual_return_pct": annual_return_pct.to_string(),
            "monthly_rate": i.to_string(),
            "months": plan.months,
            "timing": plan.timing,
        }),
        warnings,
        output,
    ))
}
