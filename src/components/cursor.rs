//! Custom cursor ring and dot following the pointer

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::components::canvas::{document, get_window_size};
use crate::components::cards::{listen, set_style};
use crate::error::{BackdropError, Result};
use crate::interaction::CursorFollower;

const HOVER_SELECTOR: &str = "a, button";

/// Install the follower if the window is wide enough
///
/// Returns whether it was installed.
///
/// # Errors
///
/// Returns an error if the window or document is unavailable or the
/// elements and listeners cannot be created.
pub fn attach_cursor_follower(follower: CursorFollower) -> Result<bool> {
    let (window_width, _) = get_window_size()?;
    if !CursorFollower::enabled_for(window_width) {
        tracing::debug!(window_width, "window too narrow for cursor follower");
        return Ok(false);
    }

    let document = document()?;
    let ring = create_overlay(&document, &follower.ring_base_style())?;
    let dot = create_overlay(&document, &follower.dot_base_style())?;
    let state = Rc::new(Cell::new(follower));

    let move_state = Rc::clone(&state);
    let (move_ring, move_dot) = (ring.clone(), dot.clone());
    listen(&document, "mousemove", move |event: MouseEvent| {
        let mut follower = move_state.get();
        follower.move_to(f64::from(event.client_x()), f64::from(event.client_y()));
        move_state.set(follower);

        let (left, top) = follower.offsets();
        for element in [&move_ring, &move_dot] {
            set_style(element, "left", &left);
            set_style(element, "top", &top);
        }
    })?;

    let targets = document
        .query_selector_all(HOVER_SELECTOR)
        .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;
    for index in 0..targets.length() {
        let Some(target) = targets
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let state = Rc::clone(&state);
            let ring = ring.clone();
            listen(&target, event, move |_: MouseEvent| {
                let mut follower = state.get();
                follower.set_hovering(hovering);
                state.set(follower);
                set_style(&ring, "transform", &follower.ring_transform());
                set_style(&ring, "border-color", &follower.ring_border_color());
            })?;
        }
    }

    tracing::debug!(hover_targets = targets.length(), "cursor follower attached");
    Ok(true)
}

fn create_overlay(document: &Document, style: &str) -> Result<HtmlElement> {
    let element = document
        .create_element("div")
        .map_err(|e| BackdropError::Style(format!("{e:?}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BackdropError::Style("div is not an HtmlElement".to_string()))?;
    element
        .set_attribute("style", style)
        .map_err(|e| BackdropError::Style(format!("{e:?}")))?;
    element
        .set_attribute("aria-hidden", "true")
        .map_err(|e| BackdropError::Style(format!("{e:?}")))?;

    document
        .body()
        .ok_or(BackdropError::DocumentNotAvailable)?
        .append_child(&element)
        .map_err(|e| BackdropError::Style(format!("{e:?}")))?;
    Ok(element)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use web_sys::MouseEventInit;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_follows_moves_anywhere_on_document() -> Result<()> {
        if !attach_cursor_follower(CursorFollower::default())? {
            return Ok(());
        }
        let document = document()?;
        let init = MouseEventInit::new();
        init.set_client_x(30);
        init.set_client_y(40);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)
            .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;
        document
            .dispatch_event(&event)
            .map_err(|e| BackdropError::ListenerFailed(format!("{e:?}")))?;

        let dot = document
            .body()
            .ok_or(BackdropError::DocumentNotAvailable)?
            .last_element_child()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(BackdropError::element_not_found("cursor dot"))?;
        let left = dot
            .style()
            .get_property_value("left")
            .map_err(|e| BackdropError::Style(format!("{e:?}")))?;
        assert_eq!(left, "30px");
        Ok(())
    }
}
