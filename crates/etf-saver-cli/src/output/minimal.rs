use serde_json::Value;

use super::result_payload;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first scalar field.
pub fn print_minimal(value: &Value) {
    let payload = result_payload(value);

    // Priority list of key output fields
    let priority_keys = [
        "monthly_amount",
        "monthly_income",
        "required_principal",
        "monthly_withdrawal",
        "end_value",
        "corpus_at_retirement",
        "weighted_return_pct",
    ];

    if let Value::Object(map) = payload {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to the first scalar field
        if let Some((key, val)) = map.iter().find(|(_, v)| !v.is_array() && !v.is_object()) {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(payload));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
