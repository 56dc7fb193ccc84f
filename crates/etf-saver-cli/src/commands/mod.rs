pub mod income;
pub mod portfolio;
pub mod retirement;
pub mod savings;
pub mod scenarios;

use etf_saver_core::scenarios::preset;
use rust_decimal::Decimal;

/// Resolve an annual return: explicit flag wins, then the named scenario.
pub fn resolve_return(
    explicit: Option<Decimal>,
    scenario: &Option<String>,
) -> Result<Decimal, Box<dyn std::error::Error>> {
    resolve_rate(explicit, scenario, |p| p.annual_return_pct, "--annual-return")
}

/// Resolve an annual dividend yield: explicit flag wins, then the scenario.
pub fn resolve_yield(
    explicit: Option<Decimal>,
    scenario: &Option<String>,
) -> Result<Decimal, Box<dyn std::error::Error>> {
    resolve_rate(explicit, scenario, |p| p.annual_yield_pct, "--annual-yield")
}

fn resolve_rate(
    explicit: Option<Decimal>,
    scenario: &Option<String>,
    pick: impl Fn(&etf_saver_core::scenarios::ScenarioPreset) -> Decimal,
    flag: &str,
) -> Result<Decimal, Box<dyn std::error::Error>> {
    if let Some(value) = explicit {
        return Ok(value);
    }
    if let Some(name) = scenario {
        let p = preset(name)
            .ok_or_else(|| format!("Unknown scenario '{}'. Run `etfs scenarios` to list them", name))?;
        return Ok(pick(p));
    }
    Err(format!("Provide {} or --scenario", flag).into())
}
