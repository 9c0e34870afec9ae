//! Browser smoke tests
//!
//! A page without the stage elements must stay inert: passes skip, they
//! never throw.

#![cfg(target_arch = "wasm32")]

use jester_wasm::api::{adjust_y, recalc};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn recalc_on_a_bare_page_is_inert() {
    let report = recalc();
    let success = js_sys::Reflect::get(&report, &"success".into()).unwrap();
    assert_eq!(success.as_bool(), Some(true));
    let placed = js_sys::Reflect::get(&report, &"placed".into()).unwrap();
    assert_eq!(placed.as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn adjust_y_still_reports_cleanly() {
    let report = adjust_y(-12.0);
    let success = js_sys::Reflect::get(&report, &"success".into()).unwrap();
    assert_eq!(success.as_bool(), Some(true));
}
