// Test viewport profile selection against the breakpoint table

use jester_wasm::models::{
    select_profile, PROFILE_DESKTOP, PROFILE_PHONE, PROFILE_PHONE_NARROW, PROFILE_TABLET,
};

#[test]
fn breakpoints_are_inclusive_of_the_upper_bound() {
    assert_eq!(select_profile(360.0), PROFILE_PHONE_NARROW);
    assert_eq!(select_profile(360.5), PROFILE_PHONE);
    assert_eq!(select_profile(420.0), PROFILE_PHONE);
    assert_eq!(select_profile(421.0), PROFILE_TABLET);
    assert_eq!(select_profile(768.0), PROFILE_TABLET);
    assert_eq!(select_profile(769.0), PROFILE_DESKTOP);
}

#[test]
fn width_is_floored_at_320() {
    // Hosts can report zero or negative widths mid-layout; those must land
    // in the narrowest class, not wrap around.
    assert_eq!(select_profile(0.0), PROFILE_PHONE_NARROW);
    assert_eq!(select_profile(-50.0), PROFILE_PHONE_NARROW);
    assert_eq!(select_profile(0.0), select_profile(320.0));
}

#[test]
fn every_width_maps_to_one_of_the_four_profiles() {
    let known = [
        PROFILE_PHONE_NARROW,
        PROFILE_PHONE,
        PROFILE_TABLET,
        PROFILE_DESKTOP,
    ];
    for w in (0..2600).step_by(7) {
        let profile = select_profile(w as f64);
        assert!(known.contains(&profile), "unknown profile for width {}", w);
    }
}

#[test]
fn desktop_profile_values() {
    let p = select_profile(1440.0);
    assert_eq!(p.padding, 8.0);
    assert_eq!(p.min_scale, 0.30);
    assert_eq!(p.sample_count, 360);
    assert_eq!(p.fine_tune_y, -5.0);
}

#[test]
fn narrow_profile_values() {
    let p = select_profile(330.0);
    assert_eq!(p.padding, 5.0);
    assert_eq!(p.min_scale, 0.22);
    assert_eq!(p.sample_count, 160);
    assert_eq!(p.fine_tune_y, -8.0);
}
