//! Window resize handling for backdrop canvases
//!
//! The canvas pixel size tracks the window. Setting it clears the canvas as
//! a side effect; the simulation is told the new bounds but is not reseeded.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, window};

use crate::error::{BackdropError, Result};
use crate::viewport::{ViewportConfig, surface_size};

/// Get current window dimensions
///
/// # Errors
///
/// Returns an error if no window is available or its inner size is not a
/// number.
pub fn get_window_size() -> Result<(f64, f64)> {
    let window = window().ok_or(BackdropError::WindowNotAvailable)?;

    let width = window
        .inner_width()
        .map_err(|e| BackdropError::Canvas(format!("failed to get window width: {e:?}")))?
        .as_f64()
        .ok_or_else(|| BackdropError::Canvas("window width is not a number".to_string()))?;

    let height = window
        .inner_height()
        .map_err(|e| BackdropError::Canvas(format!("failed to get window height: {e:?}")))?
        .as_f64()
        .ok_or_else(|| BackdropError::Canvas("window height is not a number".to_string()))?;

    Ok((width, height))
}

/// Size `canvas` to the window and return the applied pixel size
///
/// # Errors
///
/// Returns an error if the window size is unavailable or invalid, or the
/// canvas did not accept the new size.
pub fn fit_canvas_to_window(
    canvas: &HtmlCanvasElement,
    config: &ViewportConfig,
) -> Result<(u32, u32)> {
    let (window_width, window_height) = get_window_size()?;
    let (width, height) = surface_size(window_width, window_height, config)?;

    canvas.set_width(width);
    canvas.set_height(height);

    if canvas.width() != width || canvas.height() != height {
        return Err(BackdropError::Canvas(format!(
            "canvas resize failed: expected {width}x{height}, got {}x{}",
            canvas.width(),
            canvas.height()
        )));
    }

    Ok((width, height))
}

/// Handle for managing resize event listener cleanup
pub struct ResizeHandler {
    closure: Closure<dyn FnMut()>,
}

impl ResizeHandler {
    /// Remove the resize event listener from the window
    ///
    /// # Errors
    ///
    /// Returns an error if the window is unavailable or removal fails.
    pub fn remove(self) -> Result<()> {
        let window = window().ok_or(BackdropError::WindowNotAvailable)?;

        window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
            .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;

        Ok(())
    }
}

/// Refit `canvas` on every window resize, then report the new size
///
/// With `config.debounce_ms` set, only the last event of a burst is applied.
///
/// # Errors
///
/// Returns an error if the window is unavailable or the listener cannot be
/// attached.
pub fn attach_resize_listener<F>(
    canvas: HtmlCanvasElement,
    config: ViewportConfig,
    on_resize: F,
) -> Result<ResizeHandler>
where
    F: Fn(u32, u32) + 'static,
{
    let window = window().ok_or(BackdropError::WindowNotAvailable)?;

    let on_resize = Rc::new(on_resize);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let apply = Rc::new(move || match fit_canvas_to_window(&canvas, &config) {
        Ok((width, height)) => on_resize(width, height),
        Err(e) => tracing::warn!(error = %e, "ignoring resize"),
    });

    let closure = Closure::wrap(Box::new(move || match config.debounce_ms {
        None => apply(),
        Some(delay) => {
            if let Some(previous) = pending.borrow_mut().take() {
                previous.cancel();
            }
            let apply = Rc::clone(&apply);
            let pending_inner = Rc::clone(&pending);
            let timeout = Timeout::new(delay, move || {
                pending_inner.borrow_mut().take();
                apply();
            });
            *pending.borrow_mut() = Some(timeout);
        }
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;

    Ok(ResizeHandler { closure })
}
