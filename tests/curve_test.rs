// Test the fixed reference curves and arc-length lookups

use jester_wasm::curve::{reference_curves, REF_HEIGHT, REF_WIDTH};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn curves_are_deterministic() {
    assert_eq!(reference_curves(), reference_curves());
}

#[test]
fn geometry_derives_from_the_reference_constants() {
    assert_eq!(REF_WIDTH, 860.0);
    assert_eq!(REF_HEIGHT, 300.0);

    let curves = reference_curves();

    // margin = max(30, round(0.05 * 860)) = 43
    assert_eq!(curves.upper.start.x, 43.0);
    assert_eq!(curves.upper.end.x, 817.0);
    assert_eq!(curves.lower.start.x, 43.0);
    assert_eq!(curves.lower.end.x, 817.0);

    // top_y = max(52, round(0.52 * 300)) = 156; top_ctrl_y = round(0.08 * 300) - 80 = -56
    assert_eq!(curves.upper.start.y, 156.0);
    assert_eq!(curves.upper.end.y, 156.0);
    assert_eq!(curves.upper.ctrl.x, 430.0);
    assert_eq!(curves.upper.ctrl.y, -56.0);

    // bottom_y = min(270, round(0.78 * 300)) = 234; bottom_ctrl_y = round(0.42 * 300) = 126
    assert_eq!(curves.lower.start.y, 234.0);
    assert_eq!(curves.lower.ctrl.y, 126.0);
}

#[test]
fn path_data_uses_move_then_quadratic() {
    let curves = reference_curves();
    assert_eq!(curves.upper.path_d(), "M 43 156 Q 430 -56 817 156");
    assert_eq!(curves.lower.path_d(), "M 43 234 Q 430 126 817 234");
}

#[test]
fn arc_length_lookup_spans_the_curve() {
    let lower = reference_curves().lower;
    let arc = lower.arc_lengths();
    let total = arc.total_length();

    // At least as long as the straight chord between the endpoints.
    assert!(total >= 817.0 - 43.0);

    let start = arc.point_at_length(0.0);
    assert!(approx(start.x, lower.start.x, 1e-9));
    assert!(approx(start.y, lower.start.y, 1e-9));

    let end = arc.point_at_length(total);
    assert!(approx(end.x, lower.end.x, 1e-6));
    assert!(approx(end.y, lower.end.y, 1e-6));
}

#[test]
fn the_curve_is_symmetric_about_its_midpoint() {
    let arc = reference_curves().lower.arc_lengths();
    let mid = arc.point_at_length(arc.total_length() / 2.0);
    assert!(approx(mid.x, 430.0, 0.5));
}

#[test]
fn lookups_clamp_to_the_curve_ends() {
    let arc = reference_curves().lower.arc_lengths();
    let before_start = arc.point_at_length(-100.0);
    assert!(approx(before_start.x, 43.0, 1e-9));
    let past_end = arc.point_at_length(arc.total_length() + 100.0);
    assert!(approx(past_end.x, 817.0, 1e-6));
}
