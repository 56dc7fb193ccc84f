use serde_json::Value;

use etf_saver_core::scenarios::PRESETS;

/// List the named market scenarios and their default rates.
pub fn run_scenarios() -> Result<Value, Box<dyn std::error::Error>> {
    let results: Vec<Value> = PRESETS
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "annual_return_pct": p.annual_return_pct.to_string(),
                "annual_yield_pct": p.annual_yield_pct.to_string(),
            })
        })
        .collect();
    Ok(serde_json::json!({ "results": results }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_presets() {
        let value = run_scenarios().unwrap();
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["name"], "pessimistic");
        assert_eq!(results[3]["annual_return_pct"], "9.0");
    }
}
