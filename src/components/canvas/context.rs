//! Canvas 2D rendering context acquisition

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{BackdropError, Result};

/// Get 2D rendering context from canvas element
///
/// # Errors
///
/// Returns [`BackdropError::Canvas`] if:
/// - Getting context from canvas fails (JS error)
/// - Context creation returns None (browser doesn't support 2D context)
/// - Type casting to `CanvasRenderingContext2d` fails
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| BackdropError::Canvas(format!("failed to get canvas context: {e:?}")))?
        .ok_or_else(|| BackdropError::Canvas("canvas context creation returned None".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| {
            BackdropError::Canvas("failed to cast context to CanvasRenderingContext2d".to_string())
        })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::components::canvas::init::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_get_2d_context_succeeds() -> Result<()> {
        let canvas = document()?
            .create_element("canvas")
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackdropError::Canvas("not a canvas".to_string()))?;

        let context = get_2d_context(&canvas)?;
        assert!(context.canvas().is_some());
        Ok(())
    }
}
