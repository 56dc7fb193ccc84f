use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::types::{
    with_metadata, ComputationOutput, Money, Percent, SeriesPoint, Timing,
};
use crate::{annuity, income, rates};
use crate::PlannerResult;

/// One position in a portfolio. Weights are relative shares and get
/// normalized to sum to 1; rates are annual percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub weight: Decimal,
    pub annual_return_pct: Percent,
    pub annual_yield_pct: Percent,
}

/// Weighted portfolio-level rates over normalized weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedMetrics {
    pub weighted_return_pct: Percent,
    pub weighted_yield_pct: Percent,
}

/// Input for a blended portfolio projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRequest {
    pub holdings: Vec<Holding>,
    pub initial_principal: Money,
    pub monthly_amount: Money,
    pub months: u32,
    #[serde(default)]
    pub timing: Timing,
}

/// Normalized weight share of one holding; feeds the pie chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub name: String,
    pub weight: Decimal,
}

/// Output of a blended portfolio projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioProjection {
    pub weighted_return_pct: Percent,
    pub weighted_yield_pct: Percent,
    pub end_value: Money,
    /// Estimated monthly dividend on the projected end value.
    pub monthly_dividend: Money,
    pub allocations: Vec<Allocation>,
    pub growth_curve: Vec<SeriesPoint>,
}

/// Rescale holding weights to sum to 1. A portfolio needs at least one
/// positively weighted holding; negative weights are rejected.
pub fn normalize_weights(holdings: &[Holding]) -> PlannerResult<Vec<Holding>> {
    if holdings.is_empty() {
        return Err(PlannerError::EmptyPortfolio(
            "portfolio has no holdings".into(),
        ));
    }
    if let Some(h) = holdings.iter().find(|h| h.weight < Decimal::ZERO) {
        return Err(PlannerError::EmptyPortfolio(format!(
            "holding '{}' has a negative weight",
            h.name
        )));
    }
    let total: Decimal = holdings.iter().map(|h| h.weight).sum();
    if total <= Decimal::ZERO {
        return Err(PlannerError::EmptyPortfolio(
            "total weight must be greater than zero".into(),
        ));
    }
    Ok(holdings
        .iter()
        .map(|h| Holding {
            name: h.name.clone(),
            weight: h.weight / total,
            annual_return_pct: h.annual_return_pct,
            annual_yield_pct: h.annual_yield_pct,
        })
        .collect())
}

/// Weighted annual return and dividend yield over normalized weights.
pub fn weighted_metrics(holdings: &[Holding]) -> PlannerResult<WeightedMetrics> {
    let normalized = normalize_weights(holdings)?;
    let weighted_return_pct = normalized
        .iter()
        .map(|h| h.weight * h.annual_return_pct)
        .sum();
    let weighted_yield_pct = normalized
        .iter()
        .map(|h| h.weight * h.annual_yield_pct)
        .sum();
    Ok(WeightedMetrics {
        weighted_return_pct,
        weighted_yield_pct,
    })
}

/// Estimated monthly dividend of a portfolio on a given principal.
pub fn monthly_dividend(holdings: &[Holding], principal: Money) -> PlannerResult<Money> {
    let metrics = weighted_metrics(holdings)?;
    Ok(income::monthly_income(principal, metrics.weighted_yield_pct))
}

/// Project a blended portfolio: the weighted return drives a single annuity
/// projection, the weighted yield prices the dividend on the end value.
pub fn project_growth(
    request: &PortfolioRequest,
) -> PlannerResult<ComputationOutput<PortfolioProjection>> {
    let normalized = normalize_weights(&request.holdings)?;
    let metrics = weighted_metrics(&normalized)?;
    let i = rates::monthly_rate(metrics.weighted_return_pct)?;

    let end_value = annuity::future_value(
        request.initial_principal,
        request.monthly_amount,
        i,
        request.months,
        request.timing,
    );
    let growth_curve: Vec<SeriesPoint> = annuity::growth_schedule(
        request.initial_principal,
        request.monthly_amount,
        i,
        request.months,
        request.timing,
    )
    .collect();

    let allocations = normalized
        .iter()
        .map(|h| Allocation {
            name: h.name.clone(),
            weight: h.weight,
        })
        .collect();

    let output = PortfolioProjection {
        weighted_return_pct: metrics.weighted_return_pct,
        weighted_yield_pct: metrics.weighted_yield_pct,
        end_value,
        monthly_dividend: income::monthly_income(end_value, metrics.weighted_yield_pct),
        allocations,
        growth_curve,
    };

    Ok(with_metadata(
        "Portfolio projection (weight-normalized blended return, closed-form growth)",
        &serde_json::json!({
            "holdings": request.holdings.len(),
            "weighted_return_pct": metrics.weighted_return_pct.to_string(),
            "weighted_yield_pct": metrics.weighted_yield_pct.to_string(),
            "months": request.months,
            "timing": request.timing,
        }),
        Vec::new(),
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn holding(name: &str, weight: Decimal, ret: Decimal, yld: Decimal) -> Holding {
        Holding {
            name: name.to_string(),
            weight,
            annual_return_pct: ret,
            annual_yield_pct: yld,
        }
    }

    // ---------------------------------------------------------------
    // 1. Concrete scenario: 0.6/0.4 at 8%/4% -> 6.4% weighted return
    // ---------------------------------------------------------------
    #[test]
    fn test_weighted_return_concrete() {
        let holdings = vec![
            holding("growth", dec!(0.6), dec!(8), dec!(2)),
            holding("value", dec!(0.4), dec!(4), dec!(5)),
        ];
        let metrics = weighted_metrics(&holdings).unwrap();
        assert_eq!(metrics.weighted_return_pct, dec!(6.4));
        assert_eq!(metrics.weighted_yield_pct, dec!(3.2));
    }

    // ---------------------------------------------------------------
    // 2. Weights normalize regardless of scale
    // ---------------------------------------------------------------
    #[test]
    fn test_normalize_weights() {
        let holdings = vec![
            holding("a", dec!(30), dec!(8), dec!(3)),
            holding("b", dec!(20), dec!(4), dec!(2)),
        ];
        let normalized = normalize_weights(&holdings).unwrap();
        assert_eq!(normalized[0].weight, dec!(0.6));
        assert_eq!(normalized[1].weight, dec!(0.4));

        // Same metrics as the pre-scaled 0.6/0.4 portfolio
        let metrics = weighted_metrics(&holdings).unwrap();
        assert_eq!(metrics.weighted_return_pct, dec!(6.4));
    }

    // ---------------------------------------------------------------
    // 3. Empty, all-zero, and negative-weight portfolios are rejected
    // ---------------------------------------------------------------
    #[test]
    fn test_invalid_portfolios() {
        assert!(matches!(
            normalize_weights(&[]),
            Err(PlannerError::EmptyPortfolio(_))
        ));
        assert!(matches!(
            normalize_weights(&[holding("a", Decimal::ZERO, dec!(5), dec!(2))]),
            Err(PlannerError::EmptyPortfolio(_))
        ));
        assert!(matches!(
            normalize_weights(&[
                holding("a", dec!(0.5), dec!(5), dec!(2)),
                holding("b", dec!(-0.1), dec!(5), dec!(2)),
            ]),
            Err(PlannerError::EmptyPortfolio(_))
        ));
    }

    // ---------------------------------------------------------------
    // 4. Single holding at weight 1 behaves like a bare annuity call
    // ---------------------------------------------------------------
    #[test]
    fn test_single_holding_matches_bare_annuity() {
        let request = PortfolioRequest {
            holdings: vec![holding("only", dec!(1), dec!(6), dec!(3))],
            initial_principal: dec!(100_000),
            monthly_amount: dec!(10_000),
            months: 120,
            timing: Timing::EndOfPeriod,
        };
        let projection = project_growth(&request).unwrap().result;

        let i = rates::monthly_rate(dec!(6)).unwrap();
        let bare = annuity::future_value(dec!(100_000), dec!(10_000), i, 120, Timing::EndOfPeriod);
        assert_eq!(projection.end_value, bare);
    }

    // ---------------------------------------------------------------
    // 5. Projection internals are consistent with the leaf engines
    // ---------------------------------------------------------------
    #[test]
    fn test_projection_consistency() {
        let request = PortfolioRequest {
            holdings: vec![
                holding("growth", dec!(0.6), dec!(8), dec!(2)),
                holding("value", dec!(0.4), dec!(4), dec!(5)),
            ],
            initial_principal: dec!(50_000),
            monthly_amount: dec!(5_000),
            months: 60,
            timing: Timing::EndOfPeriod,
        };
        let projection = project_growth(&request).unwrap().result;

        assert_eq!(projection.growth_curve.len(), 61);
        assert_eq!(projection.growth_curve[60].value, projection.end_value);
        assert_eq!(
            projection.monthly_dividend,
            income::monthly_income(projection.end_value, dec!(3.2))
        );

        let allocation_total: Decimal = projection.allocations.iter().map(|a| a.weight).sum();
        assert_eq!(allocation_total, Decimal::ONE);
    }

    // ---------------------------------------------------------------
    // 6. Portfolio dividend on current principal
    // ---------------------------------------------------------------
    #[test]
    fn test_monthly_dividend_current_principal() {
        let holdings = vec![
            holding("growth", dec!(0.6), dec!(8), dec!(2)),
            holding("value", dec!(0.4), dec!(4), dec!(5)),
        ];
        // 1M at 3.2% yield -> 2,666.67/month
        let dividend = monthly_dividend(&holdings, dec!(1_000_000)).unwrap();
        let diff = (dividend - dec!(2_666.67)).abs();
        assert!(diff < dec!(0.01), "dividend={}", dividend);
    }
}
