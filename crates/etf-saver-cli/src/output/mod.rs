pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` payload of the computation envelope, or the value itself for
/// bare responses like solved payments.
pub(crate) fn result_payload(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// True for arrays of chart points ({month, value} records).
pub(crate) fn is_series(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.first().is_some_and(|item| {
            item.as_object()
                .is_some_and(|m| m.contains_key("month") && m.contains_key("value"))
        }),
        _ => false,
    }
}
