//! Glyph placement along the lower curve
//!
//! This is the core of the module: given the lower curve, the measured
//! boxes of the two anchor text fragments, the glyph's authored size, and
//! the active viewport profile, compute where the glyph goes, how big it
//! is, and how it is rotated. Pure — all measurements come in as values
//! and the result goes out as a value for the adapter to apply.

use serde::{Deserialize, Serialize};

use crate::curve::QuadCurve;
use crate::models::{AnchorBox, GlyphBox, Point, ViewportProfile};

/// Fixed offset added to the tangent angle, kept for calibration.
pub const ROTATION_OFFSET_DEG: f64 = 0.0;

/// Floor on the usable gap width, in px. Degenerate or negative gaps are
/// widened to this before any further math.
pub const MIN_GAP_PX: f64 = 6.0;

/// Hard floor on either glyph dimension after scaling, in px.
pub const MIN_GLYPH_DIM_PX: f64 = 8.0;

/// Breathing room subtracted from the gap when computing the shrink factor.
const SCALE_MARGIN_PX: f64 = 4.0;

/// Clearance kept between the clamped glyph and each anchor, in px.
const EDGE_CLEARANCE_PX: f64 = 2.0;

/// Where the glyph ends up: position, fitted size, and rotation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Left edge of the glyph
    pub x: f64,

    /// Top edge of the glyph
    pub y: f64,

    /// Fitted width (≤ authored width unless the 8 px floor applies)
    pub width: f64,

    /// Fitted height
    pub height: f64,

    /// Tangent angle at the chosen curve point, in degrees
    pub angle_deg: f64,

    /// Rotation pivot: the glyph's own centre
    pub pivot: Point,

    /// Whether gap fitting shrank the glyph this pass
    pub scaled: bool,
}

impl Placement {
    /// SVG transform attribute rotating the glyph about its centre.
    pub fn transform_attr(&self) -> String {
        format!(
            "rotate({}, {}, {})",
            self.angle_deg, self.pivot.x, self.pivot.y
        )
    }
}

/// Place the glyph in the gap between `before` and `after`.
///
/// The nearest curve point is found by scanning `profile.sample_count + 1`
/// samples at equal arc-length intervals; the strict `<` comparison keeps
/// the first-found minimum when two samples are exactly equidistant from
/// the gap centre, and that tie-break is deliberate — the scan proceeds
/// monotonically along the curve, so "first" is well defined.
pub fn place(
    curve: &QuadCurve,
    before: &AnchorBox,
    after: &AnchorBox,
    glyph: GlyphBox,
    profile: &ViewportProfile,
) -> Placement {
    let gap_start = before.x + before.text_length + profile.padding;
    let gap_end = after.x - profile.padding;
    let available = (gap_end - gap_start).max(MIN_GAP_PX);
    let center_x = (gap_start + gap_end) / 2.0;

    let arc = curve.arc_lengths();
    let total = arc.total_length();
    let samples = profile.sample_count.max(1);
    let step = total / samples as f64;

    let mut best_pt = arc.point_at_length(0.0);
    let mut best_len = 0.0;
    let mut best_dx = f64::INFINITY;
    for i in 0..=samples {
        let s = i as f64 * step;
        let pt = arc.point_at_length(s);
        let dx = (pt.x - center_x).abs();
        if dx < best_dx {
            best_dx = dx;
            best_pt = pt;
            best_len = s;
        }
    }

    // Finite-difference tangent one sample step to either side, clamped at
    // the curve ends.
    let delta = step.max(0.5);
    let p1 = arc.point_at_length((best_len - delta).max(0.0));
    let p2 = arc.point_at_length((best_len + delta).min(total));
    let angle_deg = (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees();

    let mut width = glyph.width;
    let mut height = glyph.height;
    let mut scaled = false;
    if width > available {
        let scale = ((available - SCALE_MARGIN_PX) / width).max(profile.min_scale);
        width = (width * scale).max(MIN_GLYPH_DIM_PX);
        height = (height * scale).max(MIN_GLYPH_DIM_PX);
        scaled = true;
    }

    // max-then-min, not `clamp`: when the floored width no longer fits the
    // gap the interval inverts, and the upper bound must win.
    let x = (best_pt.x - width / 2.0)
        .max(gap_start + EDGE_CLEARANCE_PX)
        .min(gap_end - width - EDGE_CLEARANCE_PX);
    let y = best_pt.y - height / 2.0 + profile.fine_tune_y;

    Placement {
        x,
        y,
        width,
        height,
        angle_deg: angle_deg + ROTATION_OFFSET_DEG,
        pivot: Point::new(x + width / 2.0, y + height / 2.0),
        scaled,
    }
}
