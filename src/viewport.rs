//! Viewport adapter: window size to surface size
//!
//! The surface tracks the window one-to-one. Optional maximums cap it for
//! embedding in a bounded container.

use crate::error::{BackdropError, Result};

/// Size constraints applied when matching the window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportConfig {
    /// Maximum width constraint in pixels
    pub max_width: Option<f64>,
    /// Maximum height constraint in pixels
    pub max_height: Option<f64>,
    /// Wait this long after the last resize event before applying it;
    /// `None` applies every event immediately
    pub debounce_ms: Option<u32>,
}

/// Surface pixel dimensions for a window of the given size
///
/// # Errors
///
/// Returns [`BackdropError::InvalidDimensions`] if either window dimension
/// is not finite or not positive.
///
/// # Example
///
/// ```
/// use canvas_backdrop::viewport::{ViewportConfig, surface_size};
///
/// let (width, height) = surface_size(1920.7, 1080.2, &ViewportConfig::default())?;
/// assert_eq!((width, height), (1920, 1080));
/// # Ok::<(), canvas_backdrop::error::BackdropError>(())
/// ```
pub fn surface_size(
    window_width: f64,
    window_height: f64,
    config: &ViewportConfig,
) -> Result<(u32, u32)> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(window_width) || !valid(window_height) {
        return Err(BackdropError::InvalidDimensions {
            width: window_width,
            height: window_height,
        });
    }

    let width = config
        .max_width
        .map_or(window_width, |max| window_width.min(max));
    let height = config
        .max_height
        .map_or(window_height, |max| window_height.min(max));

    Ok((to_pixels(width), to_pixels(height)))
}

/// Floor to whole pixels, never below 1
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64) -> u32 {
    value.floor().clamp(1.0, f64::from(u32::MAX)) as u32
}
