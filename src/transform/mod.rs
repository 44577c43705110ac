//! Transforms for marks time series.
//!
//! Provides detrending, Savitzky-Golay smoothing, year-over-year
//! differencing, and peak detection, plus a pipeline that derives all four
//! columns in one call.
//!
//! # Example
//!
//! ```
//! use marks_trends::transform::{detrend, difference, find_peaks_auto, smooth};
//!
//! let marks = vec![50.0, 55.0, 53.0, 60.0, 58.0];
//!
//! let residuals = detrend(&marks);
//! let smoothed = smooth(&marks).unwrap();
//! let change = difference(&smoothed);
//! let peaks = find_peaks_auto(&smoothed);
//! # assert_eq!(residuals.len(), 5);
//! # assert_eq!(change.len(), 5);
//! # assert!(peaks.len() <= 5);
//! ```

pub mod detrend;
pub mod difference;
pub mod peaks;
pub mod pipeline;
pub mod smooth;

pub use detrend::detrend;
pub use difference::difference;
pub use peaks::{find_peaks, find_peaks_auto};
pub use pipeline::{transform, transform_auto, TransformConfig, TransformResult};
pub use smooth::{savgol_filter, smooth, smoothing_window, MAX_WINDOW, POLY_ORDER};
