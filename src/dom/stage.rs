//! Stage queries and writes
//!
//! The stage contract is fixed: an SVG root with two curve paths, the two
//! anchor text fragments, and the glyph image, all found by the
//! identifiers below. A page missing any of them degrades to a skip, not
//! an error; only geometry queries that the browser itself rejects count
//! as failures.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, SvgGraphicsElement, SvgTextContentElement};

use crate::curve::{CurvePair, QuadCurve};
use crate::models::{AnchorBox, GlyphBox, ViewportProfile};
use crate::placement::{self, Placement};

/// SVG root element id.
pub const SVG_ID: &str = "svg-root";

/// Upper curve path id.
pub const PATH_TOP_ID: &str = "curve-top";

/// Lower curve path id — the one the glyph rides.
pub const PATH_BOTTOM_ID: &str = "curve-bottom";

/// Selector for the before-gap text fragment.
pub const BEFORE_SEL: &str = ".on";

/// Selector for the after-gap text fragment.
pub const AFTER_SEL: &str = ".after";

/// Glyph image element id.
pub const IMG_ID: &str = "x-img";

/// Why a pass did no work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Stage,
    Paths,
    Anchors,
    Glyph,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Stage => "stage missing",
            SkipReason::Paths => "curve paths missing",
            SkipReason::Anchors => "anchor text missing",
            SkipReason::Glyph => "glyph image missing",
        }
    }
}

/// Geometry queries the browser refused (detached or zero-area elements).
#[derive(Debug, Clone, Error)]
pub enum StageError {
    #[error("`{0}` is not a measurable SVG element")]
    NotMeasurable(&'static str),

    #[error("bounding box query failed for `{0}`")]
    BBox(&'static str),
}

/// Result of one placement attempt.
#[derive(Debug)]
pub enum PlaceOutcome {
    Placed(Placement),
    Skipped(SkipReason),
    Failed(StageError),
}

/// Write both path definitions into the stage.
///
/// Absent stage or paths is a silent no-op; the curves are constant, so
/// there is nothing to recover.
pub fn apply_curves(document: &Document, curves: &CurvePair) {
    let Some(svg) = document.get_element_by_id(SVG_ID) else {
        return;
    };
    let top = query_id(&svg, PATH_TOP_ID);
    let bottom = query_id(&svg, PATH_BOTTOM_ID);
    let (Some(top), Some(bottom)) = (top, bottom) else {
        return;
    };
    let _ = top.set_attribute("d", &curves.upper.path_d());
    let _ = bottom.set_attribute("d", &curves.lower.path_d());
}

/// Measure the anchors and glyph, run placement, and apply the result.
pub fn place_and_rotate(
    document: &Document,
    curve: &QuadCurve,
    profile: &ViewportProfile,
) -> PlaceOutcome {
    let Some(svg) = document.get_element_by_id(SVG_ID) else {
        return PlaceOutcome::Skipped(SkipReason::Stage);
    };
    if query_id(&svg, PATH_BOTTOM_ID).is_none() {
        return PlaceOutcome::Skipped(SkipReason::Paths);
    }
    let Some(before_el) = query(&svg, BEFORE_SEL) else {
        return PlaceOutcome::Skipped(SkipReason::Anchors);
    };
    let Some(after_el) = query(&svg, AFTER_SEL) else {
        return PlaceOutcome::Skipped(SkipReason::Anchors);
    };
    let Some(img) = query_id(&svg, IMG_ID) else {
        return PlaceOutcome::Skipped(SkipReason::Glyph);
    };

    let before = match measure_anchor(&before_el, "before-gap text") {
        Ok(b) => b,
        Err(e) => return PlaceOutcome::Failed(e),
    };
    let after = match measure_anchor(&after_el, "after-gap text") {
        Ok(b) => b,
        Err(e) => return PlaceOutcome::Failed(e),
    };
    let glyph = match glyph_size(&img) {
        Ok(g) => g,
        Err(e) => return PlaceOutcome::Failed(e),
    };

    let placement = placement::place(curve, &before, &after, glyph, profile);

    // Shrunk dimensions are written back so the glyph never regrows; an
    // already-fitting glyph keeps its authored size untouched.
    if placement.scaled {
        set_number(&img, "width", placement.width);
        set_number(&img, "height", placement.height);
    }
    set_number(&img, "x", placement.x);
    set_number(&img, "y", placement.y);
    let _ = img.set_attribute("transform", &placement.transform_attr());

    PlaceOutcome::Placed(placement)
}

fn query(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

fn query_id(scope: &Element, id: &str) -> Option<Element> {
    query(scope, &format!("#{}", id))
}

fn set_number(el: &Element, name: &str, value: f64) {
    let _ = el.set_attribute(name, &value.to_string());
}

fn measure_anchor(el: &Element, what: &'static str) -> Result<AnchorBox, StageError> {
    let gfx = el
        .dyn_ref::<SvgGraphicsElement>()
        .ok_or(StageError::NotMeasurable(what))?;
    let bbox = gfx.get_b_box().map_err(|_| StageError::BBox(what))?;

    let mut anchor = AnchorBox::new(
        bbox.x() as f64,
        bbox.y() as f64,
        bbox.width() as f64,
        bbox.height() as f64,
    );
    if let Some(text) = el.dyn_ref::<SvgTextContentElement>() {
        anchor.text_length = text.get_computed_text_length() as f64;
    }
    Ok(anchor)
}

/// Authored glyph size: width/height attributes when present and nonzero,
/// bounding box otherwise.
fn glyph_size(img: &Element) -> Result<GlyphBox, StageError> {
    let attr = |name: &str| {
        img.get_attribute(name)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| *v != 0.0)
    };
    let mut width = attr("width");
    let mut height = attr("height");

    if width.is_none() || height.is_none() {
        let gfx = img
            .dyn_ref::<SvgGraphicsElement>()
            .ok_or(StageError::NotMeasurable("glyph"))?;
        let bbox = gfx.get_b_box().map_err(|_| StageError::BBox("glyph"))?;
        width = width.or(Some(bbox.width() as f64));
        height = height.or(Some(bbox.height() as f64));
    }

    Ok(GlyphBox {
        width: width.unwrap_or(0.0),
        height: height.unwrap_or(0.0),
    })
}
