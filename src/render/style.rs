//! Label styling strategies.
//!
//! Print and preview output differ in background, banner, and annotation
//! behavior. Each is an explicit [`LabelStyle`] implementation selected once
//! by the caller, instead of a mode flag threaded through the layout code.

use serde::{Deserialize, Serialize};

use crate::classification::{EventCategory, event_category, shows_wristband_panel};
use crate::models::{ClassificationResult, WristbandColor};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Plain white.
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    /// Plain black.
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
}

// Palette values carried over from the operator UI so preview output stays
// consistent with the indicator panel.
const EXPO_BACKGROUND: Rgb = Rgb::new(0x2C, 0x2C, 0x2C);
const EXPO_BANNER: Rgb = Rgb::new(0x11, 0x11, 0x11);
const LPN_BACKGROUND: Rgb = Rgb::new(0xFF, 0xF3, 0xE0);
const LPN_BANNER: Rgb = Rgb::new(0xFD, 0x7E, 0x14);
const PORCIFORUM_BACKGROUND: Rgb = Rgb::new(0xE3, 0xF2, 0xFD);
const PORCIFORUM_BANNER: Rgb = Rgb::new(0x00, 0x7B, 0xFF);
const NEUTRAL_BACKGROUND: Rgb = Rgb::new(0xFA, 0xFA, 0xFA);

/// The colors a style resolved for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgePalette {
    /// Canvas background color.
    pub background: Rgb,
    /// Top banner color, when the style draws one.
    pub banner: Option<Rgb>,
    /// Text color for every text block.
    pub text: Rgb,
}

/// A badge styling strategy.
pub trait LabelStyle {
    /// Resolves the palette for an event/entry combination.
    ///
    /// Must be deterministic for a given category pair so that visual
    /// regression tests are meaningful.
    fn palette(&self, event_name: &str, entry_type: &str) -> BadgePalette;

    /// Optional suffix appended to the entry-type line.
    fn entry_suffix(
        &self,
        event_name: &str,
        classification: &ClassificationResult,
    ) -> Option<String>;
}

/// Physical print output: black on white, no decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintStyle;

impl LabelStyle for PrintStyle {
    fn palette(&self, _event_name: &str, _entry_type: &str) -> BadgePalette {
        BadgePalette {
            background: Rgb::WHITE,
            banner: None,
            text: Rgb::BLACK,
        }
    }

    fn entry_suffix(
        &self,
        _event_name: &str,
        _classification: &ClassificationResult,
    ) -> Option<String> {
        None
    }
}

/// On-screen preview: category palette plus wristband annotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewStyle;

impl LabelStyle for PreviewStyle {
    fn palette(&self, event_name: &str, entry_type: &str) -> BadgePalette {
        let entry = entry_type.to_lowercase();
        let is_congress = entry.contains("congress") || entry.contains("congreso");

        if entry.contains("expo") {
            return BadgePalette {
                background: EXPO_BACKGROUND,
                banner: Some(EXPO_BANNER),
                text: Rgb::WHITE,
            };
        }

        match event_category(event_name) {
            EventCategory::Lpn if is_congress => BadgePalette {
                background: LPN_BACKGROUND,
                banner: Some(LPN_BANNER),
                text: Rgb::BLACK,
            },
            EventCategory::PorciForum if is_congress => BadgePalette {
                background: PORCIFORUM_BACKGROUND,
                banner: Some(PORCIFORUM_BANNER),
                text: Rgb::BLACK,
            },
            _ => BadgePalette {
                background: NEUTRAL_BACKGROUND,
                banner: None,
                text: Rgb::BLACK,
            },
        }
    }

    fn entry_suffix(
        &self,
        event_name: &str,
        classification: &ClassificationResult,
    ) -> Option<String> {
        if !shows_wristband_panel(event_name) {
            return None;
        }
        if classification.wristband_color == WristbandColor::None {
            return None;
        }
        Some(format!(
            "({} wristband)",
            classification.wristband_color.label()
        ))
    }
}
