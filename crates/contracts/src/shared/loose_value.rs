//! Fields the backend stores as typed by operators.
//!
//! Menu and order records may carry numbers, numeric strings or `null` in the
//! same field, so such fields are kept as raw JSON and only formatted.

use serde_json::Value;

/// Render a raw field for display.
///
/// Integral floats drop their fraction (`2.0` shows as `2`), strings are
/// shown without quotes and `null` shows as an empty string.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
