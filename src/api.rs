//! JS-facing control surface
//!
//! The page normally never calls in — recomputation is event-driven — but
//! two manual entry points exist as a calibration escape hatch. Both
//! return a report object (`success`, `placed`, optional `skipped` /
//! `error` / `placement` fields) that callers are free to ignore.

use wasm_bindgen::prelude::*;

use crate::dom::app::{self, PassReport};

/// Re-run the full placement pass on demand.
#[wasm_bindgen]
pub fn recalc() -> JsValue {
    report_to_js(app::recalc())
}

/// Override the vertical fine-tune offset (px, negative is up) and re-run.
#[wasm_bindgen(js_name = adjustY)]
pub fn adjust_y(offset: f64) -> JsValue {
    report_to_js(app::adjust_y(offset))
}

fn report_to_js(report: PassReport) -> JsValue {
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}
