use serde::{Deserialize, Serialize};

use crate::annuity::{self, AccumulationOutput};
use crate::drawdown::{self, DrawdownOutput};
use crate::lifecycle::{self, LifecycleOutput, LifecyclePlan};
use crate::portfolio::{self, PortfolioProjection, PortfolioRequest};
use crate::rates;
use crate::types::{ComputationOutput, ContributionPlan, DrawdownMode, DrawdownPlan, Money, Percent, Timing};
use crate::PlannerResult;

/// One calculation the engine can perform, as a tagged request. The
/// presentation layer builds one of these and dispatches through [`run`];
/// there is no field-name-driven dispatch anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum CalculationRequest {
    /// Project a contribution plan to its future value.
    FutureValue {
        #[serde(flatten)]
        plan: ContributionPlan,
        annual_return_pct: Percent,
    },
    /// Solve for the monthly contribution that reaches a target value.
    SolvePayment {
        initial_principal: Money,
        target_value: Money,
        months: u32,
        #[serde(default)]
        timing: Timing,
        annual_return_pct: Percent,
    },
    /// Monthly dividend income from a principal.
    MonthlyIncome {
        principal: Money,
        annual_yield_pct: Percent,
    },
    /// Principal required for a target monthly dividend.
    RequiredPrincipal {
        target_monthly_income: Money,
        annual_yield_pct: Percent,
    },
    /// Size retirement withdrawals from a corpus.
    Drawdown {
        corpus: Money,
        annual_return_pct: Percent,
        #[serde(flatten)]
        mode: DrawdownMode,
    },
    /// Blended multi-holding projection.
    Portfolio(PortfolioRequest),
    /// Accumulation to retirement plus drawdown.
    Lifecycle(LifecyclePlan),
}

/// The matching result for each request variant. Every shape is a fixed
/// record or series; nothing opaque or partial.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum CalculationResponse {
    FutureValue(ComputationOutput<AccumulationOutput>),
    SolvePayment { monthly_amount: Money },
    MonthlyIncome { monthly_income: Money },
    RequiredPrincipal { required_principal: Money },
    Drawdown(ComputationOutput<DrawdownOutput>),
    Portfolio(ComputationOutput<PortfolioProjection>),
    Lifecycle(ComputationOutput<LifecycleOutput>),
}

/// Dispatch a calculation request to the matching engine.
pub fn run(request: &CalculationRequest) -> PlannerResult<CalculationResponse> {
    match request {
        CalculationRequest::FutureValue {
            plan,
            annual_return_pct,
        } => Ok(CalculationResponse::FutureValue(annuity::project(
            plan,
            *annual_return_pct,
        )?)),

        CalculationRequest::SolvePayment {
            initial_principal,
            target_value,
            months,
            timing,
            annual_return_pct,
        } => {
            let i = rates::monthly_rate(*annual_return_pct)?;
            let monthly_amount =
                annuity::solve_payment(*initial_principal, *target_value, i, *months, *timing)?;
            Ok(CalculationResponse::SolvePayment { monthly_amount })
        }

        CalculationRequest::MonthlyIncome {
            principal,
            annual_yield_pct,
        } => Ok(CalculationResponse::MonthlyIncome {
            monthly_income: crate::income::monthly_income(*principal, *annual_yield_pct),
        }),

        CalculationRequest::RequiredPrincipal {
            target_monthly_income,
            annual_yield_pct,
        } => Ok(CalculationResponse::RequiredPrincipal {
            required_principal: crate::income::required_principal(
                *target_monthly_income,
                *annual_yield_pct,
            )?,
        }),

        CalculationRequest::Drawdown {
            corpus,
            annual_return_pct,
            mode,
        } => {
            let plan = DrawdownPlan {
                corpus: *corpus,
                monthly_rate: rates::monthly_rate(*annual_return_pct)?,
                mode: mode.clone(),
            };
            Ok(CalculationResponse::Drawdown(drawdown::plan_withdrawals(
                &plan,
            )?))
        }

        CalculationRequest::Portfolio(portfolio_request) => Ok(CalculationResponse::Portfolio(
            portfolio::project_growth(portfolio_request)?,
        )),

        CalculationRequest::Lifecycle(plan) => Ok(CalculationResponse::Lifecycle(
            lifecycle::plan_lifecycle(plan)?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use rust_decimal_macros::dec;

    // ---------------------------------------------------------------
    // 1. Each variant dispatches to its engine
    // ---------------------------------------------------------------
    #[test]
    fn test_dispatch_future_value() {
        let request = CalculationRequest::FutureValue {
            plan: ContributionPlan {
                initial_principal: dec!(100_000),
                monthly_amount: dec!(10_000),
                months: 120,
                timing: Timing::EndOfPeriod,
            },
            annual_return_pct: dec!(6),
        };
        match run(&request).unwrap() {
            CalculationResponse::FutureValue(output) => {
                assert!(output.result.end_value > dec!(1_800_000));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_required_principal() {
        let request = CalculationRequest::RequiredPrincipal {
            target_monthly_income: dec!(20_000),
            annual_yield_pct: dec!(4),
        };
        match run(&request).unwrap() {
            CalculationResponse::RequiredPrincipal { required_principal } => {
                assert_eq!(required_principal, dec!(6_000_000));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_drawdown_swr() {
        let request = CalculationRequest::Drawdown {
            corpus: dec!(5_000_000),
            annual_return_pct: dec!(4),
            mode: DrawdownMode::SafeWithdrawalRate { swr_pct: dec!(4) },
        };
        match run(&request).unwrap() {
            CalculationResponse::Drawdown(output) => {
                let diff = (output.result.monthly_withdrawal - dec!(16_666.67)).abs();
                assert!(diff < dec!(0.01));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    // ---------------------------------------------------------------
    // 2. Errors pass through untouched
    // ---------------------------------------------------------------
    #[test]
    fn test_errors_propagate() {
        let request = CalculationRequest::SolvePayment {
            initial_principal: dec!(1_000),
            target_value: dec!(2_000),
            months: 0,
            timing: Timing::EndOfPeriod,
            annual_return_pct: dec!(5),
        };
        assert!(matches!(
            run(&request),
            Err(PlannerError::DegenerateSolve(_))
        ));
    }

    // ---------------------------------------------------------------
    // 3. Requests deserialize from tagged JSON (the wire contract)
    // ---------------------------------------------------------------
    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "operation": "solve_payment",
            "initial_principal": "0",
            "target_value": "1000000",
            "months": 120,
            "annual_return_pct": "6"
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        match run(&request).unwrap() {
            CalculationResponse::SolvePayment { monthly_amount } => {
                assert!(monthly_amount > dec!(6_000) && monthly_amount < dec!(7_000));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_drawdown_request_from_json() {
        let json = r#"{
            "operation": "drawdown",
            "corpus": "5000000",
            "annual_return_pct": "4",
            "mode": "fixed_term",
            "months": 300
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        match run(&request).unwrap() {
            CalculationResponse::Drawdown(output) => {
                assert!(output.result.schedule.is_some());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
