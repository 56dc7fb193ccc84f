use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use etf_saver_core::lifecycle::{LifecyclePlan, LifecycleWithdrawal};
use etf_saver_core::request::{run, CalculationRequest};
use etf_saver_core::types::{DrawdownMode, Timing};

use super::resolve_return;

/// Arguments for sizing retirement withdrawals from a corpus
#[derive(Args)]
pub struct DrawdownArgs {
    /// Corpus entering retirement
    #[arg(long)]
    pub corpus: Decimal,

    /// Annual return on the corpus during retirement, in percent
    #[arg(long, allow_hyphen_values = true)]
    pub annual_return: Option<Decimal>,

    /// Named market scenario supplying the return default
    #[arg(long)]
    pub scenario: Option<String>,

    /// Annuitize over this many months (fixed-term mode)
    #[arg(long, conflicts_with = "swr")]
    pub months: Option<u32>,

    /// Safe withdrawal rate in percent per year (SWR mode)
    #[arg(long, conflicts_with = "months")]
    pub swr: Option<Decimal>,
}

/// Arguments for a whole-life accumulation and drawdown projection
#[derive(Args)]
pub struct LifecycleArgs {
    /// Current age in years
    #[arg(long)]
    pub current_age: u32,

    /// Planned retirement age in years
    #[arg(long)]
    pub retirement_age: u32,

    /// Initial principal
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Monthly contribution during accumulation
    #[arg(long)]
    pub monthly: Decimal,

    /// Contribute at the start of each month (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Annual return during accumulation, in percent
    #[arg(long, allow_hyphen_values = true)]
    pub annual_return: Option<Decimal>,

    /// Named market scenario supplying return defaults for both phases
    #[arg(long)]
    pub scenario: Option<String>,

    /// Retirement horizon in years
    #[arg(long)]
    pub retirement_years: u32,

    /// Annual return on the corpus during retirement, in percent
    /// (defaults to the accumulation return)
    #[arg(long, allow_hyphen_values = true)]
    pub retirement_return: Option<Decimal>,

    /// Safe withdrawal rate in percent per year; omit to annuitize instead
    #[arg(long)]
    pub swr: Option<Decimal>,
}

pub fn run_drawdown(args: DrawdownArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.corpus < Decimal::ZERO {
        return Err("--corpus must be non-negative".into());
    }
    let annual_return_pct = resolve_return(args.annual_return, &args.scenario)?;

    let mode = match (args.months, args.swr) {
        (Some(months), None) => DrawdownMode::FixedTerm { months },
        (None, Some(swr_pct)) => DrawdownMode::SafeWithdrawalRate { swr_pct },
        _ => return Err("Provide exactly one of --months or --swr".into()),
    };

    let request = CalculationRequest::Drawdown {
        corpus: args.corpus,
        annual_return_pct,
        mode,
    };
    let response = run(&request)?;
    Ok(serde_json::to_value(&response)?)
}

pub fn run_lifecycle(args: LifecycleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.initial < Decimal::ZERO {
        return Err("--initial must be non-negative".into());
    }
    let annual_return_pct = resolve_return(args.annual_return, &args.scenario)?;
    let retirement_return_pct = args.retirement_return.unwrap_or(annual_return_pct);

    let withdrawal = match args.swr {
        Some(swr_pct) => LifecycleWithdrawal::SafeWithdrawalRate { swr_pct },
        None => LifecycleWithdrawal::Annuity,
    };
    let timing = if args.begin {
        Timing::BeginningOfPeriod
    } else {
        Timing::EndOfPeriod
    };

    let request = CalculationRequest::Lifecycle(LifecyclePlan {
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        initial_principal: args.initial,
        monthly_contribution: args.monthly,
        annual_return_pct,
        timing,
        retirement_years: args.retirement_years,
        retirement_return_pct,
        withdrawal,
    });
    let response = run(&request)?;
    Ok(serde_json::to_value(&response)?)
}
