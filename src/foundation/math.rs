pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Canonical bit pattern for using a number as a hash key.
///
/// `-0.0` folds onto `0.0`; NaN has no key.
pub(crate) fn number_key(n: f64) -> Option<u64> {
    if n.is_nan() {
        return None;
    }
    if n == 0.0 {
        return Some(0.0f64.to_bits());
    }
    Some(n.to_bits())
}

/// Shortest text for a number, matching the form style documents are written in
/// (`3`, `0.5`, `-Infinity`, `NaN`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    format!("{n}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
