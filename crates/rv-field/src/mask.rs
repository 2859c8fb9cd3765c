//! Display-range masking.
//!
//! Out-of-range entries become NaN so charts show gaps instead of rescaling
//! around extreme values. Bounds are inclusive on both ends.

use ndarray::Array2;

/// Mask a single value against `[low, high]`.
///
/// A NaN input stays NaN: both comparisons are false, so the value falls
/// through unchanged and remains the gap marker.
#[inline]
pub fn mask_value(value: f64, low: f64, high: f64) -> f64 {
    if value < low || value > high {
        f64::NAN
    } else {
        value
    }
}

/// Mask a 1D profile.
pub fn mask_profile(values: &[f64], low: f64, high: f64) -> Vec<f64> {
    values.iter().map(|&v| mask_value(v, low, high)).collect()
}

/// Mask a 2D surface.
pub fn mask_surface(values: &Array2<f64>, low: f64, high: f64) -> Array2<f64> {
    values.mapv(|v| mask_value(v, low, high))
}
