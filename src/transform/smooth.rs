//! Savitzky-Golay smoothing.
//!
//! Local polynomial least-squares smoothing over a sliding window. Each
//! output point is the value of a low-order polynomial fitted to the window
//! around it, which preserves peak shape better than a plain moving average.

use crate::error::{Result, TrendError};

/// Polynomial order used by the default smoothing policy.
pub const POLY_ORDER: usize = 3;

/// Largest window the selection policy will choose.
pub const MAX_WINDOW: usize = 21;

/// Choose the smoothing window for a series of length `n`.
///
/// Takes `min(max_window, n)`, then drops an even result by one to satisfy
/// the filter's odd-length requirement. Fails when the resulting window
/// cannot exceed the polynomial order, i.e. the series is too short to
/// smooth (for a cubic fit, anything under 5 observations).
pub fn smoothing_window(n: usize, max_window: usize, poly_order: usize) -> Result<usize> {
    let mut window = n.min(max_window);
    if window % 2 == 0 {
        window = window.saturating_sub(1);
    }
    if window <= poly_order {
        return Err(TrendError::InvalidWindow { window, poly_order });
    }
    Ok(window)
}

/// Apply a Savitzky-Golay filter with an explicit window and order.
///
/// `window` must be odd and strictly greater than `poly_order`, and the
/// series must hold at least `window` points. Interior points are fitted
/// over a centered window; points within half a window of either end re-use
/// the first (or last) full window and evaluate its fitted polynomial at
/// their own offset, so the output always has the input's length.
pub fn savgol_filter(series: &[f64], window: usize, poly_order: usize) -> Result<Vec<f64>> {
    let n = series.len();

    if window <= poly_order || window % 2 == 0 {
        return Err(TrendError::InvalidWindow { window, poly_order });
    }
    if n < window {
        return Err(TrendError::InsufficientData {
            needed: window,
            got: n,
        });
    }

    let half = window / 2;
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        // Clamp the window start so the window always covers in-bounds
        // points; off-center evaluation handles both edges.
        let start = i.saturating_sub(half).min(n - window);
        let coeffs = polyfit_window(&series[start..start + window], poly_order)?;
        let t = (i - start) as f64 - half as f64;
        result.push(polyval(&coeffs, t));
    }

    Ok(result)
}

/// Smooth a series using the window-selection policy and a cubic fit.
pub fn smooth(series: &[f64]) -> Result<Vec<f64>> {
    let window = smoothing_window(series.len(), MAX_WINDOW, POLY_ORDER)?;
    savgol_filter(series, window, POLY_ORDER)
}

/// Fit a polynomial of the given order to one full window of values.
///
/// Offsets are centered on the window midpoint, which keeps the normal
/// equations well conditioned. Returns coefficients in ascending-power
/// order.
fn polyfit_window(ys: &[f64], order: usize) -> Result<Vec<f64>> {
    let half = (ys.len() / 2) as f64;
    let num_params = order + 1;

    // Normal equations A'A @ c = A'y with A[j][k] = t_j^k
    let mut ata = vec![vec![0.0; num_params]; num_params];
    let mut aty = vec![0.0; num_params];

    let mut powers = vec![0.0; num_params];
    for (j, &y) in ys.iter().enumerate() {
        let t = j as f64 - half;
        powers[0] = 1.0;
        for k in 1..num_params {
            powers[k] = powers[k - 1] * t;
        }
        for r in 0..num_params {
            aty[r] += powers[r] * y;
            for c in 0..num_params {
                ata[r][c] += powers[r] * powers[c];
            }
        }
    }

    solve_symmetric(&ata, &aty).ok_or_else(|| {
        TrendError::Computation("polynomial fit failed: matrix not positive definite".to_string())
    })
}

/// Evaluate a polynomial (ascending-power coefficients) at `t`.
fn polyval(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Solve a symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return None; // Not positive definite
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn window_policy_follows_series_length() {
        assert_eq!(smoothing_window(5, MAX_WINDOW, POLY_ORDER).unwrap(), 5);
        assert_eq!(smoothing_window(10, MAX_WINDOW, POLY_ORDER).unwrap(), 9);
        assert_eq!(smoothing_window(21, MAX_WINDOW, POLY_ORDER).unwrap(), 21);
        assert_eq!(smoothing_window(100, MAX_WINDOW, POLY_ORDER).unwrap(), 21);
    }

    #[test]
    fn window_policy_rejects_short_series() {
        // A cubic needs a window of at least 5; lengths up to 4 cannot supply one.
        for n in 0..=4 {
            let result = smoothing_window(n, MAX_WINDOW, POLY_ORDER);
            assert!(
                matches!(result, Err(TrendError::InvalidWindow { .. })),
                "length {n} should be rejected"
            );
        }
    }

    #[test]
    fn savgol_rejects_even_window() {
        let series = vec![1.0; 10];
        let result = savgol_filter(&series, 6, POLY_ORDER);
        assert!(matches!(result, Err(TrendError::InvalidWindow { .. })));
    }

    #[test]
    fn savgol_rejects_window_not_above_order() {
        let series = vec![1.0; 10];
        let result = savgol_filter(&series, 3, POLY_ORDER);
        assert!(matches!(result, Err(TrendError::InvalidWindow { .. })));
    }

    #[test]
    fn savgol_rejects_series_shorter_than_window() {
        let series = vec![1.0, 2.0, 3.0];
        let result = savgol_filter(&series, 5, POLY_ORDER);
        assert!(matches!(
            result,
            Err(TrendError::InsufficientData { needed: 5, got: 3 })
        ));
    }

    #[test]
    fn savgol_preserves_length() {
        let series: Vec<f64> = (0..30).map(|i| (i as f64 * 0.7).sin() * 10.0).collect();
        let smoothed = savgol_filter(&series, 7, POLY_ORDER).unwrap();
        assert_eq!(smoothed.len(), series.len());
    }

    #[test]
    fn savgol_reproduces_cubic_exactly() {
        // A cubic filter fitted to cubic data is exact at every point,
        // including the off-center edge evaluations.
        let series: Vec<f64> = (0..15)
            .map(|i| {
                let x = i as f64;
                0.05 * x.powi(3) - 0.4 * x.powi(2) + 2.0 * x + 30.0
            })
            .collect();

        let smoothed = savgol_filter(&series, 7, 3).unwrap();
        for (s, y) in smoothed.iter().zip(series.iter()) {
            assert_relative_eq!(s, y, epsilon = 1e-7);
        }
    }

    #[test]
    fn savgol_constant_series_is_unchanged() {
        let series = vec![64.0; 12];
        let smoothed = savgol_filter(&series, 5, POLY_ORDER).unwrap();
        for s in smoothed {
            assert_relative_eq!(s, 64.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn smooth_uses_policy_window() {
        // Length 5 forces the window down to the series length.
        let series = vec![50.0, 55.0, 53.0, 60.0, 58.0];
        let smoothed = smooth(&series).unwrap();
        assert_eq!(smoothed.len(), 5);

        // With window == n, a cubic fit to 5 points is a single global fit.
        let direct = savgol_filter(&series, 5, 3).unwrap();
        for (a, b) in smoothed.iter().zip(direct.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn smooth_rejects_two_point_series() {
        let result = smooth(&[50.0, 60.0]);
        assert!(matches!(result, Err(TrendError::InvalidWindow { .. })));
    }

    #[test]
    fn polyval_evaluates_ascending_coefficients() {
        // 2 + 3t + t^2 at t = 2 -> 12
        assert_relative_eq!(polyval(&[2.0, 3.0, 1.0], 2.0), 12.0, epsilon = 1e-12);
    }
}
