use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::{is_series, result_payload};

/// Render the result as a field/value table. Chart series are summarized by
/// length; use the CSV output to export the points themselves.
pub fn print_table(value: &Value) {
    // Listing outputs (e.g. scenarios) are arrays of uniform records
    if let Some(Value::Array(results)) = value.as_object().and_then(|m| m.get("results")) {
        print_records(results);
        return;
    }

    let payload = result_payload(value);
    let mut builder = Builder::default();
    builder.push_record(["field", "value"]);

    if let Value::Object(map) = payload {
        for (key, val) in map {
            builder.push_record([key.as_str(), &summarize(val)]);
        }
    } else {
        builder.push_record(["value", &summarize(payload)]);
    }

    if let Some(Value::Array(warnings)) = value.as_object().and_then(|m| m.get("warnings")) {
        for warning in warnings {
            if let Some(text) = warning.as_str() {
                builder.push_record(["warning", text]);
            }
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}

fn print_records(results: &[Value]) {
    let Some(Value::Object(first)) = results.first() else {
        return;
    };
    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();

    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in results {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(summarize).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}

fn summarize(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(items) if is_series(value) => {
            format!("{} points (use --output csv to export)", items.len())
        }
        Value::Array(items) => items
            .iter()
            .map(|item| summarize(item))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}={}", k, summarize(v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
