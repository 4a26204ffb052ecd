// Tables at or below this size are scanned linearly.
const LINEAR_SCAN_MAX: usize = 8;

/// Index of the last key `<= x`, or `0` when `x` is below every key.
///
/// `keys` must be ascending. Equal keys resolve to the last of the run, the
/// same answer a left-to-right scan gives.
pub fn find_floor(keys: &[f64], x: f64) -> usize {
    if keys.len() <= LINEAR_SCAN_MAX {
        return find_floor_linear(keys, x);
    }
    keys.partition_point(|k| *k <= x).saturating_sub(1)
}

pub(crate) fn find_floor_linear(keys: &[f64], x: f64) -> usize {
    keys.iter().rposition(|k| *k <= x).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/function/stops.rs"]
mod tests;
