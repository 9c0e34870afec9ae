//! Jester Stage WASM Module
//!
//! Keeps the decorative `{x}` glyph centred, tangent-aligned, and
//! gap-fitted on the stage curve as the page reflows: on font readiness,
//! viewport changes, and menu transitions. The geometry and scheduling
//! cores are DOM-free and testable on the host; the `dom` module adapts
//! them to the page.

pub mod api;
pub mod curve;
pub mod dom;
pub mod models;
pub mod placement;
pub mod schedule;

// Re-export commonly used types
pub use models::{AnchorBox, GlyphBox, Point, ViewportProfile};
pub use placement::{place, Placement};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Jester stage module initialized");

    if let Err(err) = dom::bootstrap() {
        log::warn!("stage bootstrap failed: {:?}", err);
    }
}
