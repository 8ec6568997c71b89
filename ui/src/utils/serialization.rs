//! Serialization and parsing helpers for form values

use serde::Serializer;

/// Largest integer a JavaScript number represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize an energy quantity so whole numbers go over the wire as JSON
/// integers (`10`, not `10.0`), matching what the registry backend expects.
pub fn serialize_quantity<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Parse a raw identifier typed into a numeric input.
/// Empty or unparsable text yields zero, which validation reports as missing.
pub fn parse_identifier(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}

/// Parse a raw energy quantity. Non-finite values are treated like garbage input.
pub fn parse_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Render a quantity back into an input field without a trailing `.0`
pub fn format_quantity(value: f64) -> String {
    format!("{}", value)
}
