//! Page composition: start both backdrops and the page effects
//!
//! Each visual system is started independently. A system whose render
//! target is missing is logged and skipped; the rest of the page still
//! starts.

use std::any::Any;

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::components::canvas::{RenderTarget, acquire_canvas, find_container};
use crate::components::{
    Backdrop, BackdropHandle, attach_card_tilt, attach_cursor_follower, attach_scroll_reveal,
    fade_in_body, start_backdrop,
};
use crate::config::{BackdropConfig, Preset};
use crate::error::{BackdropError, Result};
use crate::interaction::CursorFollower;
use crate::viewport::ViewportConfig;

/// Attribute on a mount container holding JSON config overrides
pub const CONFIG_ATTRIBUTE: &str = "data-backdrop-config";

const PRESETS: [Preset; 2] = [Preset::Particles, Preset::Network];

/// Everything [`start`] brought up
#[derive(Default)]
pub struct Page {
    backdrops: Vec<BackdropHandle>,
    mounts: Vec<Box<dyn Any>>,
    skipped: Vec<Preset>,
}

impl Page {
    /// Number of visual systems running
    pub fn running(&self) -> usize {
        self.backdrops.len() + self.mounts.len()
    }

    /// Presets whose render target was missing or failed to start
    pub fn skipped(&self) -> &[Preset] {
        &self.skipped
    }

    /// Stop every backdrop and unmount the components
    ///
    /// # Errors
    ///
    /// Returns the last stop failure; every backdrop is still stopped.
    pub fn stop(self) -> Result<()> {
        let mut outcome = Ok(());
        for handle in self.backdrops {
            if let Err(e) = handle.stop() {
                tracing::warn!(error = %e, "failed to stop backdrop");
                outcome = Err(e);
            }
        }
        drop(self.mounts);
        outcome
    }

    /// Leave everything running for the lifetime of the page
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

/// Start the backdrops and page effects
///
/// For each preset, a `<canvas id="{id}-canvas">` placeholder is driven
/// directly; otherwise a [`Backdrop`] component is mounted into the
/// container `#{id}`.
pub fn start() -> Page {
    let mut page = Page::default();

    for preset in PRESETS {
        match start_preset(preset, &mut page) {
            Ok(()) => tracing::info!(?preset, "backdrop started"),
            Err(e) => {
                tracing::warn!(?preset, error = %e, "backdrop not started");
                page.skipped.push(preset);
            }
        }
    }

    start_effects();
    page
}

fn start_preset(preset: Preset, page: &mut Page) -> Result<()> {
    let id = preset.container_id();
    let viewport = ViewportConfig::default();

    let placeholder = RenderTarget::Existing {
        id: format!("{id}-canvas"),
    };
    match acquire_canvas(&placeholder) {
        Ok(canvas) => {
            let config = load_config(preset, &canvas);
            page.backdrops
                .push(start_backdrop(canvas, &config, viewport)?);
            return Ok(());
        }
        Err(BackdropError::ElementNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    let container = find_container(id)?;
    let config = load_config(preset, &container);
    let handle = leptos::mount::mount_to(container, move || {
        view! { <Backdrop config=config viewport=viewport /> }
    });
    page.mounts.push(Box::new(handle));
    Ok(())
}

/// Preset defaults, with overrides from [`CONFIG_ATTRIBUTE`] when valid
fn load_config(preset: Preset, element: &HtmlElement) -> BackdropConfig {
    let Some(json) = element.get_attribute(CONFIG_ATTRIBUTE) else {
        return preset.config();
    };
    BackdropConfig::from_json_overrides(preset, &json).unwrap_or_else(|e| {
        tracing::warn!(?preset, error = %e, "ignoring config overrides");
        preset.config()
    })
}

fn start_effects() {
    if let Err(e) = attach_card_tilt() {
        tracing::warn!(error = %e, "card tilt not attached");
    }
    if let Err(e) = attach_scroll_reveal() {
        tracing::warn!(error = %e, "scroll reveal not attached");
    }
    if let Err(e) = attach_cursor_follower(CursorFollower::default()) {
        tracing::warn!(error = %e, "cursor follower not attached");
    }
    if let Err(e) = fade_in_body() {
        tracing::warn!(error = %e, "page fade not started");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_targets_are_skipped() -> Result<()> {
        let page = start();
        assert_eq!(page.running() + page.skipped().len(), PRESETS.len());
        page.stop()
    }
}
