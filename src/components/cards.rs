//! Tilt-on-hover for `.link-card` elements

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, HtmlElement, MouseEvent};

use crate::components::canvas::document;
use crate::error::{BackdropError, Result};
use crate::interaction::{CardTilt, PRESSED_TRANSFORM};

pub const CARD_SELECTOR: &str = ".link-card";

/// Attach tilt listeners to every card on the page, returning how many
///
/// # Errors
///
/// Returns an error if the document is unavailable, the selector query
/// fails, or a listener cannot be attached.
pub fn attach_card_tilt() -> Result<usize> {
    let cards = document()?
        .query_selector_all(CARD_SELECTOR)
        .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;

    let mut attached = 0;
    for index in 0..cards.length() {
        let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        attach_to_card(&card)?;
        attached += 1;
    }

    tracing::debug!(attached, "card tilt attached");
    Ok(attached)
}

fn attach_to_card(card: &HtmlElement) -> Result<()> {
    let target = card.clone();
    listen(card, "mousemove", move |event: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let tilt = CardTilt::from_client(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        );
        set_style(&target, "transform", &tilt.transform());
        set_style(&target, "background", &tilt.background());
    })?;

    let target = card.clone();
    listen(card, "mouseleave", move |_: MouseEvent| {
        set_style(&target, "transform", "");
        set_style(&target, "background", "");
    })?;

    let target = card.clone();
    listen(card, "mousedown", move |_: MouseEvent| {
        set_style(&target, "transform", PRESSED_TRANSFORM);
    })?;

    let target = card.clone();
    listen(card, "mouseup", move |_: MouseEvent| {
        set_style(&target, "transform", "");
    })
}

/// Attach a mouse listener that lives as long as the page
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| BackdropError::ListenerFailed(format!("{event}: {e:?}")))?;
    closure.forget();
    Ok(())
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        tracing::trace!(property, error = ?e, "style update rejected");
    }
}
