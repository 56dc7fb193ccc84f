use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::Percent;

/// A named bundle of default market assumptions used to pre-fill inputs.
/// The table is fixed at compile time; consumers read, never write.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioPreset {
    pub name: &'static str,
    pub annual_return_pct: Percent,
    pub annual_yield_pct: Percent,
}

/// Preset market scenarios, from cautious to optimistic.
pub const PRESETS: [ScenarioPreset; 4] = [
    ScenarioPreset {
        name: "pessimistic",
        annual_return_pct: dec!(3.0),
        annual_yield_pct: dec!(2.0),
    },
    ScenarioPreset {
        name: "stable",
        annual_return_pct: dec!(5.0),
        annual_yield_pct: dec!(2.5),
    },
    ScenarioPreset {
        name: "historical",
        annual_return_pct: dec!(7.0),
        annual_yield_pct: dec!(3.0),
    },
    ScenarioPreset {
        name: "optimistic",
        annual_return_pct: dec!(9.0),
        annual_yield_pct: dec!(3.5),
    },
];

/// Look up a preset by name, case-insensitively.
pub fn preset(name: &str) -> Option<&'static ScenarioPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_lookup_by_name() {
        let p = preset("historical").unwrap();
        assert_eq!(p.annual_return_pct, dec!(7.0));
        assert_eq!(p.annual_yield_pct, dec!(3.0));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert!(preset("Optimistic").is_some());
        assert!(preset("PESSIMISTIC").is_some());
    }

    #[test]
    fn test_unknown_name() {
        assert!(preset("catastrophic").is_none());
    }

    #[test]
    fn test_presets_ordered_by_return() {
        for pair in PRESETS.windows(2) {
            assert!(pair[0].annual_return_pct < pair[1].annual_return_pct);
        }
    }

    #[test]
    fn test_all_rates_valid_for_compounding() {
        for p in &PRESETS {
            assert!(crate::rates::monthly_rate(p.annual_return_pct).is_ok());
            assert!(p.annual_yield_pct > Decimal::ZERO);
        }
    }
}
