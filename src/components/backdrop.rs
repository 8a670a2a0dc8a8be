//! Backdrop wiring: a scene, a canvas, a RAF loop and a resize listener
//!
//! [`start_backdrop`] drives an existing canvas element. The [`Backdrop`]
//! component renders its own overlay canvas and starts the same loop once
//! the element is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use web_sys::HtmlCanvasElement;

use crate::components::canvas::{
    AnimationHandle, CanvasSurface, OVERLAY_STYLE, ResizeHandler, attach_resize_listener,
    fit_canvas_to_window, start_animation_loop,
};
use crate::config::BackdropConfig;
use crate::driver::{AnimationDriver, FrameOutcome, Scene};
use crate::error::Result;
use crate::viewport::ViewportConfig;

type CanvasDriver = AnimationDriver<CanvasSurface, StdRng>;

/// A running backdrop; stopping it cancels the loop and detaches resize
pub struct BackdropHandle {
    animation: AnimationHandle,
    resize: ResizeHandler,
}

impl BackdropHandle {
    pub fn animation(&self) -> &AnimationHandle {
        &self.animation
    }

    /// # Errors
    ///
    /// Returns the first failure from cancelling the frame or removing the
    /// resize listener. The loop is stopped either way.
    pub fn stop(self) -> Result<()> {
        let cancelled = self.animation.stop();
        self.resize.remove()?;
        cancelled
    }
}

/// Seed a scene sized to the window and animate it on `canvas`
///
/// # Errors
///
/// Returns an error if the config is invalid, the canvas has no 2D context,
/// or the frame loop or resize listener cannot be installed.
pub fn start_backdrop(
    canvas: HtmlCanvasElement,
    config: &BackdropConfig,
    viewport: ViewportConfig,
) -> Result<BackdropHandle> {
    config.validate()?;
    let (width, height) = fit_canvas_to_window(&canvas, &viewport)?;

    let scene = Scene::new(
        config,
        f64::from(width),
        f64::from(height),
        StdRng::from_entropy(),
    )?;
    let surface = CanvasSurface::new(canvas.clone())?;
    let driver: Rc<RefCell<CanvasDriver>> =
        Rc::new(RefCell::new(AnimationDriver::new(scene, surface)));
    let lifecycle = driver.borrow().lifecycle();

    tracing::info!(
        count = config.count,
        category = ?config.category,
        width,
        height,
        "starting backdrop"
    );

    let resize_driver = Rc::clone(&driver);
    let resize = attach_resize_listener(canvas, viewport, move |width, height| {
        let Ok(mut driver) = resize_driver.try_borrow_mut() else {
            tracing::warn!("driver busy, skipping resize");
            return;
        };
        if let Err(e) = driver.resize(f64::from(width), f64::from(height)) {
            tracing::warn!(error = %e, "resize rejected");
        }
    })?;

    let frame_driver = Rc::clone(&driver);
    let frame_lifecycle = lifecycle.clone();
    let animation = start_animation_loop(lifecycle, move |timestamp| {
        let Ok(mut driver) = frame_driver.try_borrow_mut() else {
            return FrameOutcome::Skipped;
        };
        match driver.frame(timestamp) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "frame failed, stopping backdrop");
                frame_lifecycle.stop();
                FrameOutcome::Stopped
            }
        }
    });

    match animation {
        Ok(animation) => Ok(BackdropHandle { animation, resize }),
        Err(e) => {
            if let Err(remove_err) = resize.remove() {
                tracing::warn!(error = %remove_err, "failed to detach resize listener");
            }
            Err(e)
        }
    }
}

/// Full-size overlay canvas animating `config`
#[component]
pub fn Backdrop(
    config: BackdropConfig,
    #[prop(optional)] viewport: ViewportConfig,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let handle = StoredValue::new_local(None::<BackdropHandle>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if handle.with_value(Option::is_some) {
            return;
        }
        match start_backdrop(canvas, &config, viewport) {
            Ok(started) => handle.set_value(Some(started)),
            Err(e) => tracing::error!(error = %e, "failed to start backdrop"),
        }
    });

    on_cleanup(move || {
        let Some(started) = handle.try_update_value(Option::take).flatten() else {
            return;
        };
        if let Err(e) = started.stop() {
            tracing::warn!(error = %e, "failed to stop backdrop");
        }
    });

    view! {
        <canvas node_ref=canvas_ref style=OVERLAY_STYLE aria-hidden="true" />
    }
}
