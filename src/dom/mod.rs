//! Browser adapter layer
//!
//! Everything that touches the DOM lives here: querying and measuring the
//! stage, writing placement results back, the header-height side channel,
//! the hamburger-menu wiring, and the event listeners that feed the
//! schedule coordinator. The placement core never sees any of it.

pub mod app;
pub mod events;
pub mod header;
pub mod menu;
pub mod stage;

use wasm_bindgen::JsValue;

/// Wire the module into the page.
///
/// Menu handling attaches immediately; the first placement pass waits for
/// the fonts-ready signal, since anchor boxes measured against fallback
/// fonts would be wrong. Returns `Err` only when listener attachment
/// itself fails — a page missing the expected elements is not an error.
pub fn bootstrap() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    app::ensure_app();
    menu::wire(&document)?;
    events::wire_fonts_ready(&document);
    Ok(())
}
