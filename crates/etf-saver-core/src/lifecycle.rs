use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::types::{
    with_metadata, ComputationOutput, Money, Percent, SeriesPoint, Timing,
};
use crate::{annuity, drawdown, rates};
use crate::PlannerResult;

const MONTHS_PER_YEAR: u32 = 12;

/// How retirement withdrawals are sized once the corpus is accumulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "withdrawal", rename_all = "snake_case")]
pub enum LifecycleWithdrawal {
    /// Annuitize the corpus over the retirement horizon.
    Annuity,
    /// Withdraw a fixed annual percentage of the corpus, split monthly.
    SafeWithdrawalRate { swr_pct: Percent },
}

/// A whole-life plan: accumulate from the current age to retirement, then
/// draw the corpus down over the retirement horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecyclePlan {
    pub current_age: u32,
    pub retirement_age: u32,
    pub initial_principal: Money,
    pub monthly_contribution: Money,
    /// Expected annual return during accumulation, in percent.
    pub annual_return_pct: Percent,
    #[serde(default)]
    pub timing: Timing,
    /// Retirement horizon in years (chart length for SWR, annuity term otherwise).
    pub retirement_years: u32,
    /// Expected annual return on the corpus during retirement, in percent.
    pub retirement_return_pct: Percent,
    #[serde(flatten)]
    pub withdrawal: LifecycleWithdrawal,
}

/// Full lifecycle projection: corpus at retirement plus both balance curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleOutput {
    pub months_to_retirement: u32,
    pub corpus_at_retirement: Money,
    pub monthly_withdrawal: Money,
    /// First month of retirement with a zero balance, if the corpus runs out
    /// within the horizon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depleted_month: Option<u32>,
    pub accumulation_curve: Vec<SeriesPoint>,
    pub drawdown_curve: Vec<SeriesPoint>,
}

/// Project a full lifecycle plan.
pub fn plan_lifecycle(plan: &LifecyclePlan) -> PlannerResult<ComputationOutput<LifecycleOutput>> {
    let mut warnings: Vec<String> = Vec::new();

    if plan.retirement_age < plan.current_age {
        return Err(PlannerError::InvalidTerm(format!(
            "retirement age {} is before current age {}",
            plan.retirement_age, plan.current_age
        )));
    }
    if plan.retirement_years == 0 {
        return Err(PlannerError::InvalidTerm(
            "retirement horizon must be at least one year".into(),
        ));
    }

    // Accumulation phase
    let months_to_retirement = (plan.retirement_age - plan.current_age) * MONTHS_PER_YEAR;
    let i = rates::monthly_rate(plan.annual_return_pct)?;
    let corpus_at_retirement = annuity::future_value(
        plan.initial_principal,
        plan.monthly_contribution,
        i,
        months_to_retirement,
        plan.timing,
    );
    let accumulation_curve: Vec<SeriesPoint> = annuity::growth_schedule(
        plan.initial_principal,
        plan.monthly_contribution,
        i,
        months_to_retirement,
        plan.timing,
    )
    .collect();

    // Drawdown phase
    let retirement_months = plan.retirement_years * MONTHS_PER_YEAR;
    let j = rates::monthly_rate(plan.retirement_return_pct)?;
    let monthly_withdrawal = match plan.withdrawal {
        LifecycleWithdrawal::Annuity => {
            drawdown::fixed_term(corpus_at_retirement, j, retirement_months)?
        }
        LifecycleWithdrawal::SafeWithdrawalRate { swr_pct } => {
            drawdown::safe_withdrawal_rate(corpus_at_retirement, swr_pct)
        }
    };
    let drawdown_curve: Vec<SeriesPoint> =
        drawdown::depletion_schedule(corpus_at_retirement, j, monthly_withdrawal, retirement_months)
            .collect();

    let depleted_month = drawdown_curve
        .iter()
        .find(|p| p.month > 0 && p.value.is_zero())
        .map(|p| p.month);
    if let Some(month) = depleted_month {
        if month < retirement_months {
            warnings.push(format!(
                "Corpus depleted after {} months, before the {}-month retirement horizon",
                month, retirement_months
            ));
        }
    }

    let output = LifecycleOutput {
        months_to_retirement,
        corpus_at_retirement,
        monthly_withdrawal,
        depleted_month,
        accumulation_curve,
        drawdown_curve,
    };

    Ok(with_metadata(
        "Lifecycle projection (accumulation to retirement, then fixed-term or SWR drawdown)",
        &serde_json::json!({
            "current_age": plan.current_age,
            "retirement_age": plan.retirement_age,
            "annual_return_pct": plan.annual_return_pct.to_string(),
            "retirement_return_pct": plan.retirement_return_pct.to_string(),
            "retirement_years": plan.retirement_years,
            "withdrawal": plan.withdrawal,
        }),
        warnings,
        output,
    ))
}
