//! Viewport profiles
//!
//! A profile bundles the tunables that vary with viewport width: gap
//! padding, the shrink floor, the nearest-point sample density, and the
//! vertical fine-tune nudge. Selection is a pure breakpoint lookup; the
//! profile is threaded by value through each pass and never stored in
//! process-wide state.

use serde::{Deserialize, Serialize};

/// Tunables for one viewport width class.
///
/// Immutable per recomputation pass; a fresh profile is selected at the
/// start of every pass and replaced wholesale, never partially mutated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewportProfile {
    /// Horizontal padding between each anchor and the gap, in px
    pub padding: f64,

    /// Lower bound on the shrink factor applied to the glyph (0–1)
    pub min_scale: f64,

    /// Number of arc-length steps in the nearest-point scan
    pub sample_count: u32,

    /// Vertical nudge applied to the placed glyph, in px
    pub fine_tune_y: f64,
}

/// Narrowest phones (width ≤ 360).
pub const PROFILE_PHONE_NARROW: ViewportProfile = ViewportProfile {
    padding: 5.0,
    min_scale: 0.22,
    sample_count: 160,
    fine_tune_y: -8.0,
};

/// Common phones (width ≤ 420).
pub const PROFILE_PHONE: ViewportProfile = ViewportProfile {
    padding: 6.0,
    min_scale: 0.24,
    sample_count: 200,
    fine_tune_y: -7.0,
};

/// Tablets and small laptops (width ≤ 768).
pub const PROFILE_TABLET: ViewportProfile = ViewportProfile {
    padding: 7.0,
    min_scale: 0.26,
    sample_count: 260,
    fine_tune_y: -6.0,
};

/// Everything wider.
pub const PROFILE_DESKTOP: ViewportProfile = ViewportProfile {
    padding: 8.0,
    min_scale: 0.30,
    sample_count: 360,
    fine_tune_y: -5.0,
};

/// Hosts occasionally report a zero or negative width during layout;
/// widths are floored here before the breakpoint lookup.
pub const MIN_VIEWPORT_WIDTH: f64 = 320.0;

/// Map the current viewport width to its profile.
///
/// Breakpoints are inclusive of the upper bound: a 360 px viewport gets
/// the narrow-phone profile, not the phone one.
pub fn select_profile(viewport_width: f64) -> ViewportProfile {
    let w = viewport_width.max(MIN_VIEWPORT_WIDTH);
    if w <= 360.0 {
        PROFILE_PHONE_NARROW
    } else if w <= 420.0 {
        PROFILE_PHONE
    } else if w <= 768.0 {
        PROFILE_TABLET
    } else {
        PROFILE_DESKTOP
    }
}
