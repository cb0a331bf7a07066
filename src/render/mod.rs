//! Badge rendering for the check-in badge engine.
//!
//! This module turns an attendee record and its classification into a
//! [`BadgeImageSpec`]: a resolution-independent description of the label
//! (text blocks, banner, paid marker, QR block) that a print or preview
//! collaborator rasterizes. Rendering is pure and always succeeds.

mod badge;
mod layout;
mod style;

pub use badge::{
    BadgeImageSpec, Banner, BlockKind, CANVAS_HEIGHT, CANVAS_WIDTH, PaidMarker, QrBlock,
    QrEcLevel, RenderMode, TextBlock, render, render_with,
};
pub use layout::{GlyphMetrics, TextMeasure, wrap_text};
pub use style::{BadgePalette, LabelStyle, PreviewStyle, PrintStyle, Rgb};
