use serde_json::Value;

pub const NO_RESULTS_MESSAGE: &str = "No chapters found";
pub const REQUEST_ERROR_MESSAGE: &str =
    "Error: Could not fetch chapter data. Please try again later.";

/// Formats a parsed `/api/data` response for the result region.
pub fn render_response(response: &Value) -> String {
    match response {
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        _ => NO_RESULTS_MESSAGE.to_string(),
    }
}

/// String coercion for JSON values, matching how a browser prints them.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_f64() {
            // whole floats print without a fraction or exponent below 1e21
            Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
                if float == 0.0 {
                    "0".to_string()
                } else {
                    format!("{float:.0}")
                }
            }
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        // nested nulls print as empty slots
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
