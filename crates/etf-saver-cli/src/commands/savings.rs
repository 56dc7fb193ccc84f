use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use etf_saver_core::request::{run, CalculationRequest};
use etf_saver_core::types::{ContributionPlan, Timing};

use super::resolve_return;

/// Arguments for periodic-investment accumulation
#[derive(Args)]
pub struct AccumulateArgs {
    /// Initial principal
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Monthly contribution
    #[arg(long)]
    pub monthly: Decimal,

    /// Investment horizon in months
    #[arg(long)]
    pub months: u32,

    /// Contribute at the start of each month (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Expected annual return in percent (e.g. 6 for 6%)
    #[arg(long, allow_hyphen_values = true)]
    pub annual_return: Option<Decimal>,

    /// Named market scenario supplying the return default
    #[arg(long)]
    pub scenario: Option<String>,
}

/// Arguments for solving the contribution toward a target value
#[derive(Args)]
pub struct GoalArgs {
    /// Target future value
    #[arg(long)]
    pub target: Decimal,

    /// Initial principal
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Months until the target date
    #[arg(long)]
    pub months: u32,

    /// Contribute at the start of each month (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Expected annual return in percent
    #[arg(long, allow_hyphen_values = true)]
    pub annual_return: Option<Decimal>,

    /// Named market scenario supplying the return default
    #[arg(long)]
    pub scenario: Option<String>,
}

fn timing(begin: bool) -> Timing {
    if begin {
        Timing::BeginningOfPeriod
    } else {
        Timing::EndOfPeriod
    }
}

pub fn run_accumulate(args: AccumulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.initial < Decimal::ZERO {
        return Err("--initial must be non-negative".into());
    }
    let annual_return_pct = resolve_return(args.annual_return, &args.scenario)?;

    let request = CalculationRequest::FutureValue {
        plan: ContributionPlan {
            initial_principal: args.initial,
            monthly_amount: args.monthly,
            months: args.months,
            timing: timing(args.begin),
        },
        annual_return_pct,
    };
    let response = run(&request)?;
    Ok(serde_json::to_value(&response)?)
}

pub fn run_goal(args: GoalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.target <= Decimal::ZERO {
        return Err("--target must be positive".into());
    }
    let annual_return_pct = resolve_return(args.annual_return, &args.scenario)?;

    let request = CalculationRequest::SolvePayment {
        initial_principal: args.initial,
        target_value: args.target,
        months: args.months,
        timing: timing(args.begin),
        annual_return_pct,
    };
    let response = run(&request)?;
    Ok(serde_json::to_value(&response)?)
}
