use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use etf_saver_core::request::{run, CalculationRequest};

use super::resolve_yield;

/// Arguments for dividend income from a principal
#[derive(Args)]
pub struct IncomeArgs {
    /// Invested principal
    #[arg(long)]
    pub principal: Decimal,

    /// Annual dividend yield in percent (e.g. 3 for 3%)
    #[arg(long)]
    pub annual_yield: Option<Decimal>,

    /// Named market scenario supplying the yield default
    #[arg(long)]
    pub scenario: Option<String>,
}

/// Arguments for the principal behind a target monthly dividend
#[derive(Args)]
pub struct RequiredPrincipalArgs {
    /// Target monthly dividend income
    #[arg(long)]
    pub target_monthly: Decimal,

    /// Annual dividend yield in percent
    #[arg(long)]
    pub annual_yield: Option<Decimal>,

    /// Named market scenario supplying the yield default
    #[arg(long)]
    pub scenario: Option<String>,
}

pub fn run_income(args: IncomeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.principal < Decimal::ZERO {
        return Err("--principal must be non-negative".into());
    }
    let annual_yield_pct = resolve_yield(args.annual_yield, &args.scenario)?;

    let request = CalculationRequest::MonthlyIncome {
        principal: args.principal,
        annual_yield_pct,
    };
    let response = run(&request)?;
    Ok(serde_json::to_value(&response)?)
}

pub fn run_required_principal(
    args: RequiredPrincipalArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    if args.target_monthly <= Decimal::ZERO {
        return Err("--target-monthly must be positive".into());
    }
    let annual_yield_pct = resolve_yield(args.annual_yield, &args.scenario)?;

    let request = CalculationRequest::RequiredPrincipal {
        target_monthly_income: args.target_monthly,
        annual_yield_pct,
    };
    let response = run(&request)?;
    Ok(serde_json::to_value(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required_principal_concrete() {
        let value = run_required_principal(RequiredPrincipalArgs {
            target_monthly: dec!(20_000),
            annual_yield: Some(dec!(4)),
            scenario: None,
        })
        .unwrap();
        let principal: Decimal = value["required_principal"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(principal, dec!(6_000_000));
    }

    #[test]
    fn test_income_with_scenario_yield() {
        let value = run_income(IncomeArgs {
            principal: dec!(1_200_000),
            annual_yield: None,
            scenario: Some("stable".to_string()),
        })
        .unwrap();
        // 1.2M at 2.5% -> 2,500/month
        let income: Decimal = value["monthly_income"].as_str().unwrap().parse().unwrap();
        assert_eq!(income, dec!(2_500));
    }

    #[test]
    fn test_zero_yield_rejected() {
        let result = run_required_principal(RequiredPrincipalArgs {
            target_monthly: dec!(10_000),
            annual_yield: Some(Decimal::ZERO),
            scenario: None,
        });
        assert!(result.is_err());
    }
}
