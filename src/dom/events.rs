//! Browser event wiring and the `setTimeout`-backed timer host
//!
//! Resize and orientation listeners attach once the first pass has run;
//! the fonts-ready signal gates that first pass so anchor boxes are
//! measured against the real fonts, not fallbacks.

use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::schedule::{TimerHost, TimerId, Trigger};

use super::app;

/// `TimerHost` over `window.setTimeout`.
///
/// Each task's closure stays owned here until it fires or is cancelled,
/// keyed by its own token rather than the DOM handle so a handle reused
/// by the browser can never alias a live entry.
pub struct DomTimers {
    next_token: u32,
    pending: HashMap<u32, PendingTimer>,
}

struct PendingTimer {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl DomTimers {
    pub fn new() -> Self {
        Self {
            next_token: 0,
            pending: HashMap::new(),
        }
    }

    /// Drop the bookkeeping for a task that just fired. The wasm-bindgen
    /// glue keeps the closure's memory alive until its invocation returns.
    pub fn complete(&mut self, id: TimerId) {
        self.pending.remove(&id.0);
    }
}

impl Default for DomTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerHost for DomTimers {
    fn schedule(&mut self, delay_ms: u32, trigger: Trigger) -> TimerId {
        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);
        let id = TimerId(token);

        let closure = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            app::timer_fired(id, trigger);
        }));
        let handle = web_sys::window()
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    delay_ms as i32,
                )
                .ok()
            })
            .unwrap_or(-1);

        self.pending.insert(
            token,
            PendingTimer {
                handle,
                _closure: closure,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(timer) = self.pending.remove(&id.0) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timer.handle);
            }
        }
    }
}

/// Run the first pass when fonts are ready.
///
/// Uses the Font Loading API when the host has one; otherwise a single
/// deferred pass stands in, which is as close as such hosts get.
pub fn wire_fonts_ready(document: &Document) {
    let has_fonts_api = js_sys::Reflect::get(document.as_ref(), &JsValue::from_str("fonts"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);

    if has_fonts_api {
        if let Ok(promise) = document.fonts().ready() {
            let callback = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |_| {
                app::fonts_ready();
            }));
            // Run on rejection too; a failed font load still ends loading.
            let _ = promise.then2(&callback, &callback);
            callback.forget();
            return;
        }
    }
    app::schedule_fonts_fallback();
}

/// Attach the viewport listeners. Called once, after the first pass.
pub fn wire_window_listeners() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let onresize = Closure::<dyn FnMut()>::wrap(Box::new(|| {
        app::resized();
    }));
    let _ = window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref());
    onresize.forget();

    let onorientation = Closure::<dyn FnMut()>::wrap(Box::new(|| {
        app::orientation_changed();
    }));
    let _ = window.add_event_listener_with_callback(
        "orientationchange",
        onorientation.as_ref().unchecked_ref(),
    );
    onorientation.forget();
}
