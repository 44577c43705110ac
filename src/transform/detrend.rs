//! Linear detrending.

/// Remove the best-fit linear trend from a series.
///
/// Fits `y = slope * i + intercept` over the index positions by ordinary
/// least squares and returns the residuals. A constant or perfectly linear
/// series detrends to zeros; a single observation has a trivial residual
/// of 0.
pub fn detrend(series: &[f64]) -> Vec<f64> {
    if series.len() < 2 {
        return vec![0.0; series.len()];
    }

    let n = series.len() as f64;

    // x values are indices 0, 1, 2, ...
    let sum_x: f64 = (0..series.len()).map(|i| i as f64).sum();
    let sum_y: f64 = series.iter().sum();
    let sum_xy: f64 = series.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..series.len()).map(|i| (i * i) as f64).sum();

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    // ss_xx is strictly positive for two or more index positions
    let ss_xx = sum_x2 - n * mean_x * mean_x;
    let ss_xy = sum_xy - n * mean_x * mean_y;

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    series
        .iter()
        .enumerate()
        .map(|(i, &y)| y - (slope * i as f64 + intercept))
        .collect()
}
