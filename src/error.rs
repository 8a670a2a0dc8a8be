//! Error types for the backdrop crate
//!
//! Every fallible operation returns [`Result`]. JS-side failures arrive as
//! `JsValue`s and are carried as their debug rendering.

use thiserror::Error;

/// Errors raised while configuring, simulating, or mounting a backdrop
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackdropError {
    /// A configuration value failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Surface or window dimensions were not finite and positive
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// No `window` object (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// No `document` object on the window
    #[error("document is not available")]
    DocumentNotAvailable,

    /// The render target or container was not present in the document
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// A canvas or 2D-context operation failed
    #[error("canvas error: {0}")]
    Canvas(String),

    /// `requestAnimationFrame` could not be scheduled or cancelled
    #[error("animation frame error: {0}")]
    RequestFrameFailed(String),

    /// Attaching or removing a DOM event listener failed
    #[error("listener error: {0}")]
    ListenerFailed(String),

    /// Writing an inline style failed
    #[error("style error: {0}")]
    Style(String),
}

impl BackdropError {
    /// Build an [`BackdropError::InvalidConfig`] from any message
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Build an [`BackdropError::ElementNotFound`] for the given id
    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }
}

/// Result type alias for backdrop operations
pub type Result<T> = std::result::Result<T, BackdropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BackdropError::element_not_found("particles");
        assert_eq!(error.to_string(), "element not found: #particles");

        let error = BackdropError::InvalidDimensions {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(error.to_string(), "invalid dimensions: 0x600");

        let error = BackdropError::invalid_config("count must be > 0");
        assert_eq!(error.to_string(), "invalid config: count must be > 0");
    }

    #[test]
    fn test_error_clone() {
        let error = BackdropError::Canvas("arc failed".to_string());
        assert_eq!(error.clone(), error);
    }
}
