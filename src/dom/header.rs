//! Header height side-channel
//!
//! The fixed header's rendered height is published as a document-scoped
//! CSS variable so page styling can offset content below it. External
//! collaborator of the placement system; recomputed at the end of every
//! full pass because the same reflows that move the anchors can change
//! the navbar's wrap.

use wasm_bindgen::JsCast;
use web_sys::Document;

/// Selector for the navigation bar.
pub const NAVBAR_SEL: &str = ".navbar";

/// CSS variable the height is published under.
pub const HEADER_HEIGHT_VAR: &str = "--header-height";

/// Measure the navbar and publish its height. Missing navbar or root
/// element is a no-op.
pub fn publish_height(document: &Document) {
    let Some(nav) = document.query_selector(NAVBAR_SEL).ok().flatten() else {
        return;
    };
    let height = nav.get_bounding_client_rect().height().ceil();

    let Some(root) = document.document_element() else {
        return;
    };
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let _ = root
        .style()
        .set_property(HEADER_HEIGHT_VAR, &format!("{}px", height));
}
