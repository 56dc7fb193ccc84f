use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Annual rates entered in percent (6 = 6%), matching user-facing inputs.
pub type Percent = Decimal;

/// Effective monthly compounding rates as decimal fractions (0.004868 ≈ 6% p.a.).
pub type Rate = Decimal;

/// When during the month a contribution lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Ordinary annuity: contribute at the end of each month.
    #[default]
    EndOfPeriod,
    /// Annuity-due: contribute at the start of each month.
    BeginningOfPeriod,
}

/// A periodic-investment plan over a whole number of months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionPlan {
    pub initial_principal: Money,
    pub monthly_amount: Money,
    pub months: u32,
    #[serde(default)]
    pub timing: Timing,
}

/// How retirement withdrawals are sized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DrawdownMode {
    /// Annuitize the corpus over a fixed number of months.
    FixedTerm { months: u32 },
    /// Withdraw an annual percentage of the corpus, split monthly.
    SafeWithdrawalRate { swr_pct: Percent },
}

/// A retirement drawdown scenario. `monthly_rate` is the effective monthly
/// return earned by the corpus during the withdrawal phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawdownPlan {
    pub corpus: Money,
    pub monthly_rate: Rate,
    #[serde(flatten)]
    pub mode: DrawdownMode,
}

/// One point of a chartable series: balance at the end of `month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month: u32,
    pub value: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
