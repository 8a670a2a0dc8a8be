//! Scroll reveal and page-load fade-in

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::components::canvas::document;
use crate::components::cards::set_style;
use crate::error::{BackdropError, Result};

pub const REVEAL_SELECTOR: &str = ".link-card, .profile-header, .footer";
/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const FADE_DELAY_MS: u32 = 100;

/// Reveal matching elements as they scroll into view
///
/// The hidden starting style belongs to the page stylesheet.
///
/// Returns the number of observed elements.
///
/// # Errors
///
/// Returns an error if the document is unavailable or the observer cannot
/// be created.
pub fn attach_scroll_reveal() -> Result<u32> {
    let callback = Closure::wrap(Box::new(|entries: Array, _observer: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                set_style(&target, "opacity", "1");
                set_style(&target, "transform", "translateY(0)");
            }
        }
    }) as Box<dyn FnMut(Array, JsValue)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;
    callback.forget();

    let elements = document()?
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;
    let mut observed = 0;
    for index in 0..elements.length() {
        let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        observer.observe(&element);
        observed += 1;
    }

    tracing::debug!(observed, "scroll reveal attached");
    Ok(observed)
}

/// Start the body transparent and fade it in shortly after load
///
/// # Errors
///
/// Returns an error if the document has no body.
pub fn fade_in_body() -> Result<()> {
    let body = document()?
        .body()
        .ok_or(BackdropError::DocumentNotAvailable)?;
    set_style(&body, "opacity", "0");

    Timeout::new(FADE_DELAY_MS, move || {
        set_style(&body, "transition", "opacity 0.5s ease");
        set_style(&body, "opacity", "1");
    })
    .forget();
    Ok(())
}
