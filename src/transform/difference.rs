//! Year-over-year differencing.

/// First discrete difference of a series.
///
/// The output has the input's length. Index 0 has no year before it, so its
/// change is undefined and represented as `f64::NAN`, never zero: a zero in
/// this column means a genuinely flat year.
pub fn difference(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(series.len());
    result.push(f64::NAN);
    result.extend(series.windows(2).map(|w| w[1] - w[0]));
    result
}
