use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use etf_saver_core::portfolio::{Holding, PortfolioRequest};
use etf_saver_core::request::{run, CalculationRequest};
use etf_saver_core::types::Timing;

use crate::input;

use super::{resolve_return, resolve_yield};

/// Arguments for a blended portfolio projection
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to a JSON file with a full portfolio request
    #[arg(long, conflicts_with = "holding")]
    pub input: Option<String>,

    /// Holding as "name:weight[:return_pct[:yield_pct]]"; repeatable.
    /// Missing rates fall back to --scenario
    #[arg(long)]
    pub holding: Vec<String>,

    /// Initial principal
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Monthly contribution
    #[arg(long, default_value = "0")]
    pub monthly: Decimal,

    /// Investment horizon in months
    #[arg(long, default_value = "120")]
    pub months: u32,

    /// Contribute at the start of each month (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Named market scenario supplying per-holding rate defaults
    #[arg(long)]
    pub scenario: Option<String>,
}

/// Parse "name:weight[:return_pct[:yield_pct]]" into a holding.
fn parse_holding(
    spec: &str,
    scenario: &Option<String>,
) -> Result<Holding, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() < 2 || parts.len() > 4 {
        return Err(format!(
            "Invalid holding '{}'. Expected name:weight[:return_pct[:yield_pct]]",
            spec
        )
        .into());
    }

    let name = parts[0].trim();
    if name.is_empty() {
        return Err(format!("Holding '{}' has no name", spec).into());
    }
    let weight: Decimal = parts[1]
        .parse()
        .map_err(|_| format!("Invalid weight in holding '{}'", spec))?;

    let explicit_return = match parts.get(2) {
        Some(s) => Some(
            s.parse()
                .map_err(|_| format!("Invalid return in holding '{}'", spec))?,
        ),
        None => None,
    };
    let explicit_yield = match parts.get(3) {
        Some(s) => Some(
            s.parse()
                .map_err(|_| format!("Invalid yield in holding '{}'", spec))?,
        ),
        None => None,
    };

    Ok(Holding {
        name: name.to_string(),
        weight,
        annual_return_pct: resolve_return(explicit_return, scenario)?,
        annual_yield_pct: resolve_yield(explicit_yield, scenario)?,
    })
}

pub fn run_portfolio(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = if let Some(path) = &args.input {
        input::read_json::<PortfolioRequest>(path)?
    } else {
        if args.holding.is_empty() {
            return Err("Provide --input or at least one --holding".into());
        }
        let holdings = args
            .holding
            .iter()
            .map(|spec| parse_holding(spec, &args.scenario))
            .collect::<Result<Vec<Holding>, _>>()?;
        PortfolioRequest {
            holdings,
            initial_principal: args.initial,
            monthly_amount: args.monthly,
            months: args.months,
            timing: if args.begin {
                Timing::BeginningOfPeriod
            } else {
                Timing::EndOfPeriod
            },
        }
    };

    let response = run(&CalculationRequest::Portfolio(request))?;
    Ok(serde_json::to_value(&response)?)
}
