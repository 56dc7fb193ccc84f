use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::rates::compound;
use crate::types::{
    with_metadata, ComputationOutput, DrawdownMode, DrawdownPlan, Money, Percent, Rate,
    SeriesPoint,
};
use crate::PlannerResult;

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Result of sizing retirement withdrawals from a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawdownOutput {
    pub monthly_withdrawal: Money,
    /// Remaining balance per month for fixed-term plans; absent for SWR,
    /// which has no defined horizon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<SeriesPoint>>,
}

/// Level monthly withdrawal that annuitizes a corpus over m months:
/// monthly = corpus * j / (1 - (1+j)^(-m)), with the corpus/m limit at j = 0.
pub fn fixed_term(corpus: Money, j: Rate, m: u32) -> PlannerResult<Money> {
    if m == 0 {
        return Err(PlannerError::InvalidTerm(
            "withdrawal term must be at least one month".into(),
        ));
    }
    if j.is_zero() {
        return Ok(corpus / Decimal::from(m));
    }
    let denom = Decimal::ONE - Decimal::ONE / compound(j, m);
    Ok(corpus * j / denom)
}

/// Monthly withdrawal under a safe withdrawal rate:
/// monthly = corpus * (swr/100) / 12.
pub fn safe_withdrawal_rate(corpus: Money, swr_pct: Percent) -> Money {
    corpus * (swr_pct / HUNDRED) / MONTHS_PER_YEAR
}

/// Size the monthly withdrawal for a drawdown plan.
pub fn monthly_withdrawal(plan: &DrawdownPlan) -> PlannerResult<Money> {
    match plan.mode {
        DrawdownMode::FixedTerm { months } => fixed_term(plan.corpus, plan.monthly_rate, months),
        DrawdownMode::SafeWithdrawalRate { swr_pct } => {
            Ok(safe_withdrawal_rate(plan.corpus, swr_pct))
        }
    }
}

/// Remaining balance per month while withdrawing `monthly` from a corpus
/// growing at j, months 0..=m, clamped at zero once the corpus is exhausted.
///
/// Each point comes straight from the closed form
/// bal_t = corpus*(1+j)^t - monthly*((1+j)^t - 1)/j (corpus - monthly*t at
/// j = 0), so the iterator is stateless and restartable.
pub fn depletion_schedule(
    corpus: Money,
    j: Rate,
    monthly: Money,
    m: u32,
) -> impl Iterator<Item = SeriesPoint> + Clone {
    (0..=m).map(move |month| {
        let balance = if j.is_zero() {
            corpus - monthly * Decimal::from(month)
        } else {
            let growth = compound(j, month);
            corpus * growth - monthly * (growth - Decimal::ONE) / j
        };
        SeriesPoint {
            month,
            value: balance.max(Decimal::ZERO),
        }
    })
}

/// Size withdrawals for a plan and, for fixed-term plans, produce the
/// depletion schedule for charting.
pub fn plan_withdrawals(plan: &DrawdownPlan) -> PlannerResult<ComputationOutput<DrawdownOutput>> {
    let monthly = monthly_withdrawal(plan)?;
    let schedule = match plan.mode {
        DrawdownMode::FixedTerm { months } => {
            Some(depletion_schedule(plan.corpus, plan.monthly_rate, monthly, months).collect())
        }
        DrawdownMode::SafeWithdrawalRate { .. } => None,
    };

    let output = DrawdownOutput {
        monthly_withdrawal: monthly,
        schedule,
    };

    Ok(with_metadata(
        "Retirement drawdown (fixed-term annuitization or safe withdrawal rate)",
        &serde_json::json!({
            "corpus": plan.corpus.to_string(),
            "monthly_rate": plan.monthly_rate.to_string(),
            "mode": plan.mode,
        }),
        Vec::new(),
        output,
    ))
}
