// Test the pass report shape handed back to JS callers

use jester_wasm::dom::app::PassReport;
use jester_wasm::dom::stage::SkipReason;
use jester_wasm::models::Point;
use jester_wasm::placement::Placement;
use serde_json::json;

#[test]
fn skipped_reports_carry_the_reason_only() {
    let report = PassReport::skipped(SkipReason::Stage);
    let value = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["placed"], json!(false));
    assert_eq!(value["skipped"], json!("stage missing"));
    assert!(value.get("error").is_none());
    assert!(value.get("placement").is_none());
}

#[test]
fn failed_reports_are_not_successes() {
    let report = PassReport::failed("bounding box query failed for `glyph`");
    let value = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(value["success"], json!(false));
    assert_eq!(value["placed"], json!(false));
    assert!(value.get("skipped").is_none());
    assert_eq!(
        value["error"],
        json!("bounding box query failed for `glyph`")
    );
}

#[test]
fn placed_reports_embed_the_placement() {
    let placement = Placement {
        x: 138.0,
        y: 191.0,
        width: 24.0,
        height: 24.0,
        angle_deg: -11.4,
        pivot: Point::new(150.0, 203.0),
        scaled: false,
    };
    let value =
        serde_json::to_value(PassReport::placed(placement)).expect("report should serialize");

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["placed"], json!(true));
    assert_eq!(value["placement"]["x"], json!(138.0));
    assert_eq!(value["placement"]["pivot"]["x"], json!(150.0));
}
