use serde_json::Value;
use std::io;

use super::{is_series, result_payload};

/// Write output as CSV to stdout.
///
/// Results carrying chart series export them as month/value rows;
/// everything else falls back to field/value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(Value::Array(results)) = value.as_object().and_then(|m| m.get("results")) {
        write_records(&mut wtr, results);
        let _ = wtr.flush();
        return;
    }

    let payload = result_payload(value);
    let series: Vec<(&str, &Vec<Value>)> = match payload {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| is_series(v))
            .filter_map(|(k, v)| v.as_array().map(|points| (k.as_str(), points)))
            .collect(),
        _ => Vec::new(),
    };

    if series.is_empty() {
        write_fields(&mut wtr, payload);
    } else {
        write_series(&mut wtr, &series);
    }

    let _ = wtr.flush();
}

fn write_series(wtr: &mut csv::Writer<io::StdoutLock<'_>>, series: &[(&str, &Vec<Value>)]) {
    let labelled = series.len() > 1;
    if labelled {
        let _ = wtr.write_record(["series", "month", "value"]);
    } else {
        let _ = wtr.write_record(["month", "value"]);
    }
    for (name, points) in series {
        for point in *points {
            let month = point["month"].to_string();
            let value = format_csv_value(&point["value"]);
            if labelled {
                let _ = wtr.write_record([*name, &month, &value]);
            } else {
                let _ = wtr.write_record([month.as_str(), &value]);
            }
        }
    }
}

fn write_fields(wtr: &mut csv::Writer<io::StdoutLock<'_>>, payload: &Value) {
    let _ = wtr.write_record(["field", "value"]);
    if let Value::Object(map) = payload {
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
        }
    } else {
        let _ = wtr.write_record(["value", &format_csv_value(payload)]);
    }
}

fn write_records(wtr: &mut csv::Writer<io::StdoutLock<'_>>, results: &[Value]) {
    let Some(Value::Object(first)) = results.first() else {
        return;
    };
    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in results {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
