//! Measured geometry carried between the browser and the placement core
//!
//! All coordinates are in stage (SVG user) space. The browser adapter
//! fills these from `getBBox`/`getComputedTextLength`; the placement core
//! never touches the DOM.

use serde::{Deserialize, Serialize};

/// A point in stage coordinates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured bounding box of one anchor text fragment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorBox {
    /// Left edge of the rendered box
    pub x: f64,

    /// Top edge of the rendered box
    pub y: f64,

    /// Rendered box width
    pub width: f64,

    /// Rendered box height
    pub height: f64,

    /// Advance width of the text itself. Falls back to the box width when
    /// the host cannot report computed text length.
    pub text_length: f64,
}

impl AnchorBox {
    /// Build an anchor from a bounding box alone; `text_length` defaults
    /// to the box width.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text_length: width,
        }
    }
}

/// Authored size of the decorative glyph before any gap fitting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBox {
    pub width: f64,
    pub height: f64,
}

impl GlyphBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
