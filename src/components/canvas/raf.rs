//! RequestAnimationFrame-based animation loop
//!
//! Re-schedules itself once per display refresh until its [`Lifecycle`] is
//! stopped. Pauses while the tab is hidden via the Page Visibility API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::driver::{FrameOutcome, Lifecycle};
use crate::error::{BackdropError, Result};

/// Self-referencing frame callback; it reschedules itself
type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

type VisibilityClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops or inspects a running loop
#[derive(Clone)]
pub struct AnimationHandle {
    window: Window,
    document: Document,
    request_id: Rc<Cell<Option<i32>>>,
    frame_callback: RafClosure,
    visibility: VisibilityClosure,
    lifecycle: Lifecycle,
}

impl AnimationHandle {
    /// Stop the loop, cancel any pending frame and release both callbacks
    ///
    /// Stopping twice is harmless. Must not be called from inside the frame
    /// callback, which is dropped here.
    ///
    /// # Errors
    ///
    /// Returns [`BackdropError::RequestFrameFailed`] if cancellation fails or
    /// [`BackdropError::ListenerFailed`] if the visibility listener cannot be
    /// removed. The callbacks are released either way.
    pub fn stop(&self) -> Result<()> {
        self.lifecycle.stop();

        let cancelled = match self.request_id.take() {
            Some(id) => self
                .window
                .cancel_animation_frame(id)
                .map_err(|e| BackdropError::RequestFrameFailed(format!("{e:?}"))),
            None => Ok(()),
        };

        let detached = match self.visibility.borrow_mut().take() {
            Some(closure) => self
                .document
                .remove_event_listener_with_callback(
                    "visibilitychange",
                    closure.as_ref().unchecked_ref(),
                )
                .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}"))),
            None => Ok(()),
        };

        // Breaks the callback's reference to itself
        self.frame_callback.borrow_mut().take();

        cancelled.and(detached)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }
}

/// Start a `requestAnimationFrame` loop
///
/// `on_frame` receives the host timestamp in milliseconds. The next frame is
/// requested after every call unless `on_frame` returns
/// [`FrameOutcome::Stopped`] or the lifecycle has been stopped.
///
/// # Errors
///
/// Returns an error if there is no window or document, the first frame
/// cannot be requested, or the visibility listener cannot be attached.
pub fn start_animation_loop<F>(lifecycle: Lifecycle, on_frame: F) -> Result<AnimationHandle>
where
    F: FnMut(f64) -> FrameOutcome + 'static,
{
    let window = web_sys::window().ok_or(BackdropError::WindowNotAvailable)?;
    let document = window.document().ok_or(BackdropError::DocumentNotAvailable)?;

    let request_id = Rc::new(Cell::new(None::<i32>));
    let request_id_clone = Rc::clone(&request_id);

    let closure: RafClosure = Rc::new(RefCell::new(None));
    let closure_clone = Rc::clone(&closure);

    let window_clone = window.clone();
    let loop_lifecycle = lifecycle.clone();
    let mut on_frame = on_frame;

    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        request_id_clone.set(None);
        if loop_lifecycle.is_stopped() {
            return;
        }

        if on_frame(timestamp) == FrameOutcome::Stopped || loop_lifecycle.is_stopped() {
            tracing::debug!("animation loop stopped");
            return;
        }

        match schedule_next_frame(&window_clone, &closure_clone) {
            Ok(id) => request_id_clone.set(Some(id)),
            Err(e) => {
                tracing::error!(error = %e, "failed to schedule next frame");
                loop_lifecycle.stop();
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let handle = AnimationHandle {
        window,
        document,
        request_id,
        frame_callback: closure,
        visibility: Rc::new(RefCell::new(None)),
        lifecycle,
    };

    let started = schedule_next_frame(&handle.window, &handle.frame_callback)
        .map(|id| handle.request_id.set(Some(id)))
        .and_then(|()| {
            let listener = visibility_listener(&handle.document, handle.lifecycle.clone())?;
            *handle.visibility.borrow_mut() = Some(listener);
            Ok(())
        });

    match started {
        Ok(()) => Ok(handle),
        Err(e) => {
            if let Err(stop_err) = handle.stop() {
                tracing::warn!(error = %stop_err, "failed to clean up animation loop");
            }
            Err(e)
        }
    }
}

fn schedule_next_frame(window: &Window, closure: &RafClosure) -> Result<i32> {
    closure
        .borrow()
        .as_ref()
        .ok_or_else(|| BackdropError::RequestFrameFailed("frame callback missing".to_string()))
        .and_then(|cb| {
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| BackdropError::RequestFrameFailed(format!("{e:?}")))
        })
}

/// Pause while the tab is hidden, resume when it is visible again
///
/// The returned closure must outlive the listener registration.
fn visibility_listener(
    document: &Document,
    lifecycle: Lifecycle,
) -> Result<Closure<dyn FnMut()>> {
    let closure = Closure::wrap(Box::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if document.hidden() {
            lifecycle.pause();
        } else {
            lifecycle.resume();
        }
    }) as Box<dyn FnMut()>);

    document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())
        .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;

    Ok(closure)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use crate::driver::AnimationState;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_animation_handle_stop() -> Result<()> {
        let handle = start_animation_loop(Lifecycle::new(), |_| FrameOutcome::Skipped)?;

        handle.stop()?;
        assert_eq!(handle.lifecycle().state(), AnimationState::Stopped);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_stop_releases_callbacks() -> Result<()> {
        let handle = start_animation_loop(Lifecycle::new(), |_| FrameOutcome::Skipped)?;
        assert!(handle.visibility.borrow().is_some());
        assert!(handle.frame_callback.borrow().is_some());

        handle.stop()?;
        assert!(handle.visibility.borrow().is_none());
        assert!(handle.frame_callback.borrow().is_none());
        assert_eq!(handle.request_id.get(), None);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_no_panics_on_multiple_stops() -> Result<()> {
        let handle = start_animation_loop(Lifecycle::new(), |_| FrameOutcome::Skipped)?;

        handle.stop()?;
        handle.stop()?;
        handle.stop()?;
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_pause_resume_through_handle() -> Result<()> {
        let handle = start_animation_loop(Lifecycle::new(), |_| FrameOutcome::Skipped)?;
        let lifecycle = handle.lifecycle();

        lifecycle.pause();
        assert_eq!(lifecycle.state(), AnimationState::Paused);
        lifecycle.resume();
        assert_eq!(lifecycle.state(), AnimationState::Running);

        handle.stop()?;
        Ok(())
    }
}
