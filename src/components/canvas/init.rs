//! Render target lookup
//!
//! A backdrop either draws into an existing `<canvas>` placeholder or into
//! an overlay canvas it inserts into a container element.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use crate::error::{BackdropError, Result};

/// Inline style for an overlay canvas filling its container without
/// intercepting pointer events
pub const OVERLAY_STYLE: &str =
    "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;";

pub(crate) fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(BackdropError::WindowNotAvailable)?
        .document()
        .ok_or(BackdropError::DocumentNotAvailable)
}

/// Look up an existing `<canvas id="{id}">`
///
/// # Errors
///
/// Returns [`BackdropError::ElementNotFound`] if no element has that id, or
/// [`BackdropError::Canvas`] if the element is not a canvas.
pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| BackdropError::element_not_found(id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BackdropError::Canvas(format!("#{id} is not a canvas element")))
}

/// Look up the container an overlay canvas will be mounted into
///
/// # Errors
///
/// Returns [`BackdropError::ElementNotFound`] if no element has that id.
pub fn find_container(id: &str) -> Result<HtmlElement> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| BackdropError::element_not_found(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BackdropError::element_not_found(id))
}

/// Where a backdrop draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// An existing `<canvas>` in the page
    Existing { id: String },
    /// A new overlay canvas appended to this container
    Overlay { container_id: String },
}

/// Resolve `target` to a canvas element, creating the overlay if needed
///
/// # Errors
///
/// Returns [`BackdropError::ElementNotFound`] if the placeholder or
/// container is missing, or [`BackdropError::Canvas`] if the overlay cannot
/// be created.
pub fn acquire_canvas(target: &RenderTarget) -> Result<HtmlCanvasElement> {
    match target {
        RenderTarget::Existing { id } => find_canvas(id),
        RenderTarget::Overlay { container_id } => {
            let container = find_container(container_id)?;
            let canvas = document()?
                .create_element("canvas")
                .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| BackdropError::Canvas("created element is not a canvas".to_string()))?;
            canvas
                .set_attribute("style", OVERLAY_STYLE)
                .map_err(|e| BackdropError::Style(format!("{e:?}")))?;
            container
                .append_child(&canvas)
                .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;
            Ok(canvas)
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_find_canvas_placeholder() -> Result<()> {
        let document = document()?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;
        canvas.set_id("test-placeholder");
        document
            .body()
            .ok_or(BackdropError::DocumentNotAvailable)?
            .append_child(&canvas)
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;

        let found = find_canvas("test-placeholder")?;
        assert_eq!(found.id(), "test-placeholder");
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_overlay_is_appended_to_container() -> Result<()> {
        let document = document()?;
        let container = document
            .create_element("div")
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;
        container.set_id("test-overlay-container");
        document
            .body()
            .ok_or(BackdropError::DocumentNotAvailable)?
            .append_child(&container)
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;

        let canvas = acquire_canvas(&RenderTarget::Overlay {
            container_id: "test-overlay-container".to_string(),
        })?;
        assert_eq!(container.child_element_count(), 1);
        assert_eq!(canvas.get_attribute("style").as_deref(), Some(OVERLAY_STYLE));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_missing_target_is_reported() {
        let result = find_canvas("does-not-exist");
        assert_eq!(
            result.err(),
            Some(BackdropError::element_not_found("does-not-exist"))
        );
    }

    #[wasm_bindgen_test]
    fn test_non_canvas_is_rejected() -> Result<()> {
        let document = document()?;
        let div = document
            .create_element("div")
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;
        div.set_id("test-not-canvas");
        document
            .body()
            .ok_or(BackdropError::DocumentNotAvailable)?
            .append_child(&div)
            .map_err(|e| BackdropError::Canvas(format!("{e:?}")))?;

        assert!(matches!(
            find_canvas("test-not-canvas"),
            Err(BackdropError::Canvas(_))
        ));
        Ok(())
    }
}
