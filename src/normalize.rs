/// Scale `values` to 0-100 relative to their own maximum.
///
/// A zero maximum (which includes an empty slice) yields all zeros instead of
/// dividing by zero.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if values.is_empty() || max == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max * 100.0).collect()
}
