//! Fixed decorative curves
//!
//! The stage renders two quadratic arcs whose geometry is derived from a
//! fixed 860×300 reference box. Device size only ever scales the rendering
//! viewbox; the curve shape itself is identical on every device, so curve
//! generation takes no inputs at all.

pub mod quad;

pub use quad::{ArcLengthTable, QuadCurve};

use crate::models::Point;

/// Reference stage width the curves are derived from.
pub const REF_WIDTH: f64 = 860.0;

/// Reference stage height.
pub const REF_HEIGHT: f64 = 300.0;

/// The upper and lower decorative arcs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePair {
    pub upper: QuadCurve,
    pub lower: QuadCurve,
}

/// Derive both arcs from the reference constants.
///
/// Deterministic and side-effect-free: two calls always produce identical
/// curves regardless of the actual viewport.
pub fn reference_curves() -> CurvePair {
    let w = REF_WIDTH;
    let h = REF_HEIGHT;

    let margin = (w * 0.05).round().max(30.0);
    let top_y = (h * 0.52).round().max(52.0);
    let top_ctrl_y = (h * 0.08).round() - 80.0;
    let bottom_y = (h * 0.78).round().min(h - 30.0);
    let bottom_ctrl_y = (h * 0.42).round();

    CurvePair {
        upper: QuadCurve::new(
            Point::new(margin, top_y),
            Point::new(w / 2.0, top_ctrl_y),
            Point::new(w - margin, top_y),
        ),
        lower: QuadCurve::new(
            Point::new(margin, bottom_y),
            Point::new(w / 2.0, bottom_ctrl_y),
            Point::new(w - margin, bottom_y),
        ),
    }
}
