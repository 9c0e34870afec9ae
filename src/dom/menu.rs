//! Hamburger menu wiring
//!
//! Open/close visuals are pure CSS keyed on the state classes; this
//! module only maintains those classes, mirrors them to ARIA, and tells
//! the coordinator that surrounding layout is about to move. Closing on
//! outside click or Escape is unconditional — re-closing a closed menu is
//! idempotent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, KeyboardEvent};

use super::app;

/// Toggle button id.
pub const TOGGLE_ID: &str = "menu-toggle";

/// Slide-out panel id.
pub const PANEL_ID: &str = "mobile-menu";

const ACTIVE_CLASS: &str = "active";
const SHOW_CLASS: &str = "show";

/// Attach the menu handlers. A page without a menu is left alone.
pub fn wire(document: &Document) -> Result<(), JsValue> {
    let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
        return Ok(());
    };
    let Some(panel) = document.get_element_by_id(PANEL_ID) else {
        return Ok(());
    };

    {
        let onclick = {
            let toggle = toggle.clone();
            let panel = panel.clone();
            Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
                // Keep the document-level outside-click handler from seeing
                // the same click and immediately re-closing.
                e.stop_propagation();
                if toggle.class_list().contains(ACTIVE_CLASS) {
                    close(&toggle, &panel);
                } else {
                    open(&toggle, &panel);
                }
            }))
        };
        toggle.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let onclick = {
            let toggle = toggle.clone();
            let panel = panel.clone();
            Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
                let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                let inside =
                    |el: &Element| target.as_ref().is_some_and(|n| el.contains(Some(n)));
                if !inside(&toggle) && !inside(&panel) {
                    close(&toggle, &panel);
                }
            }))
        };
        document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(
            move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    close(&toggle, &panel);
                }
            },
        ));
        document.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
        onkeydown.forget();
    }

    Ok(())
}

fn open(toggle: &Element, panel: &Element) {
    let _ = toggle.class_list().add_1(ACTIVE_CLASS);
    let _ = panel.class_list().add_1(SHOW_CLASS);
    let _ = toggle.set_attribute("aria-expanded", "true");
    let _ = panel.set_attribute("aria-hidden", "false");
    app::menu_toggled(true);
}

fn close(toggle: &Element, panel: &Element) {
    let _ = toggle.class_list().remove_1(ACTIVE_CLASS);
    let _ = panel.class_list().remove_1(SHOW_CLASS);
    let _ = toggle.set_attribute("aria-expanded", "false");
    let _ = panel.set_attribute("aria-hidden", "true");
    app::menu_toggled(false);
}
