//! Viewport unit computation and pixel formatting.
//!
//! Kept free of host access so the arithmetic can be tested directly.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use crate::consts::PX_SUFFIX;
use crate::error::HostError;

/// Scale a viewport height by `fraction`.
///
/// Negative zero is normalized so a zero-height viewport publishes `0px`.
///
/// # Errors
///
/// Returns [`HostError::InvalidHeight`] when `height` is NaN or infinite, or
/// when scaling it overflows to infinity.
pub fn scaled_height(height: f64, fraction: f64) -> Result<f64, HostError> {
    if !height.is_finite() {
        return Err(HostError::InvalidHeight(height));
    }
    let scaled = height * fraction;
    if !scaled.is_finite() {
        return Err(HostError::InvalidHeight(height));
    }
    Ok(scaled + 0.0)
}

/// Render a pixel value the way a CSS length is written, e.g. `8px` or `8.13px`.
///
/// Uses the shortest decimal that round-trips, so whole values carry no
/// trailing `.0`. Never switches to exponent notation: a value below `1e-6`
/// prints as a long plain decimal where JavaScript would write `5e-7`. Both
/// are valid CSS lengths.
#[must_use]
pub fn format_px(value: f64) -> String {
    format!("{value}{PX_SUFFIX}")
}

/// Compute and format the published value for a viewport `height`.
///
/// # Errors
///
/// Propagates [`scaled_height`] failures.
pub fn px_for_height(height: f64, fraction: f64) -> Result<String, HostError> {
    scaled_height(height, fraction).map(format_px)
}
