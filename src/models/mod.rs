//! Data model for the stage placement system
//!
//! This module contains the value types exchanged between the browser
//! adapter and the pure placement core: measured boxes, the glyph size,
//! and the per-viewport tunable profile.

pub mod geometry;
pub mod profile;

// Re-export commonly used types
pub use geometry::{AnchorBox, GlyphBox, Point};
pub use profile::{
    select_profile, ViewportProfile, PROFILE_DESKTOP, PROFILE_PHONE, PROFILE_PHONE_NARROW,
    PROFILE_TABLET,
};
