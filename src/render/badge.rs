//! Badge layout and the [`BadgeImageSpec`] output type.
//!
//! The canvas is a landscape 62 mm label at 300 dpi (1200x696 px). Text
//! blocks occupy the left side in a fixed top-to-bottom order; the QR block
//! sits in the right 40% of the canvas, vertically centred, sized
//! independently of the text layout.

use serde::{Deserialize, Serialize};

use crate::models::{AttendeeRecord, ClassificationResult};

use super::layout::{GlyphMetrics, TextMeasure, wrap_text};
use super::style::{LabelStyle, PreviewStyle, PrintStyle, Rgb};

/// Canvas width in pixels (100 mm-class label length at 300 dpi).
pub const CANVAS_WIDTH: u32 = 1200;
/// Canvas height in pixels (62 mm tape width at 300 dpi).
pub const CANVAS_HEIGHT: u32 = 696;

const PADDING: i32 = 25;
const BANNER_HEIGHT: u32 = 60;

/// Width of the right-hand zone reserved for the QR block (40% of canvas).
const QR_ZONE: i32 = (CANVAS_WIDTH as i32) * 40 / 100;
/// Pixel budget for wrapped text lines.
const TEXT_WIDTH: u32 = (CANVAS_WIDTH as i32 - QR_ZONE - 3 * PADDING) as u32;

const FONT_NAME: u32 = 95;
const FONT_COMPANY: u32 = 60;
const FONT_ENTRY: u32 = 45;
const FONT_DAYS: u32 = 60;

const ADVANCE_NAME: i32 = 110;
const ADVANCE_COMPANY: i32 = 90;
const ADVANCE_ENTRY: i32 = 60;
const ADVANCE_DAYS: i32 = 90;

const PAID_MARKER_SIZE: u32 = 70;

/// Selects the rendering strategy for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// On-screen preview with the category palette.
    #[default]
    Preview,
    /// Physical label output, black on white.
    Print,
}

/// Identifies what a text block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Attendee name and last name.
    Name,
    /// Entry-type label, possibly annotated with the wristband color.
    EntryType,
    /// Event display name.
    EventName,
    /// Company or organisation.
    Company,
    /// Attendance days display string.
    Days,
}

/// A block of laid-out text lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// What the block holds.
    pub kind: BlockKind,
    /// Left edge of the block.
    pub x: i32,
    /// Top edge of the first line.
    pub y: i32,
    /// Font size in pixels.
    pub font_size: u32,
    /// Vertical advance between lines.
    pub line_advance: i32,
    /// Text color.
    pub color: Rgb,
    /// The wrapped lines, top to bottom.
    pub lines: Vec<String>,
}

/// A full-width colored band across the top of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Band height in pixels, anchored at the top edge.
    pub height: u32,
    /// Band color.
    pub color: Rgb,
}

/// The "P" marker indicating a paid attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidMarker {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Square side length.
    pub size: u32,
    /// Rectangle fill color.
    pub background: Rgb,
    /// Glyph color.
    pub glyph_color: Rgb,
}

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrEcLevel {
    /// ~7% recovery; the fixed level used on badges.
    Low,
    /// ~15% recovery.
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

/// The QR code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBlock {
    /// Encoded payload: the bare attendee id.
    pub payload: String,
    /// Error-correction level.
    pub error_correction: QrEcLevel,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Square side length.
    pub size: u32,
}

/// A complete, renderable description of one badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeImageSpec {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background fill.
    pub background: Rgb,
    /// Optional top banner.
    pub banner: Option<Banner>,
    /// Optional paid marker, drawn above the text blocks.
    pub paid_marker: Option<PaidMarker>,
    /// Text blocks in top-to-bottom order.
    pub text_blocks: Vec<TextBlock>,
    /// The QR block.
    pub qr: QrBlock,
}

/// Renders a badge for the given mode.
///
/// Convenience wrapper over [`render_with`] that picks the strategy and the
/// default glyph metrics. Pure and total: rendering always produces a valid
/// spec, whatever the record contents.
///
/// # Example
///
/// ```
/// use checkin_engine::classification::classify;
/// use checkin_engine::models::AttendeeRecord;
/// use checkin_engine::render::{CANVAS_HEIGHT, CANVAS_WIDTH, RenderMode, render};
///
/// let attendee = AttendeeRecord {
///     attendee_id: "A-1042".to_string(),
///     full_name: "Marta".to_string(),
///     last_name: "Vidal".to_string(),
///     company: "Granja Sol SL".to_string(),
///     event_id: Some(1),
///     entry_type: "Congress Pass".to_string(),
///     pirata: false,
///     paid: true,
///     days: "12-13 Nov".to_string(),
/// };
/// let classification = classify("LPN Congress 2025", &attendee.entry_type, attendee.pirata);
///
/// let badge = render(&attendee, "LPN Congress 2025", &classification, RenderMode::Print);
/// assert_eq!((badge.width, badge.height), (CANVAS_WIDTH, CANVAS_HEIGHT));
/// assert_eq!(badge.qr.payload, "A-1042");
/// ```
pub fn render(
    attendee: &AttendeeRecord,
    event_name: &str,
    classification: &ClassificationResult,
    mode: RenderMode,
) -> BadgeImageSpec {
    match mode {
        RenderMode::Preview => {
            render_with(attendee, event_name, classification, &PreviewStyle, &GlyphMetrics)
        }
        RenderMode::Print => {
            render_with(attendee, event_name, classification, &PrintStyle, &GlyphMetrics)
        }
    }
}

/// Renders a badge with an explicit style strategy and text measure.
pub fn render_with<S: LabelStyle, M: TextMeasure>(
    attendee: &AttendeeRecord,
    event_name: &str,
    classification: &ClassificationResult,
    style: &S,
    measure: &M,
) -> BadgeImageSpec {
    let palette = style.palette(event_name, &attendee.entry_type);
    let banner = palette.banner.map(|color| Banner {
        height: BANNER_HEIGHT,
        color,
    });

    let mut y_pos: i32 = match banner {
        Some(b) => b.height as i32 + PADDING,
        None => PADDING,
    };
    let mut text_blocks = Vec::new();

    let paid_marker = attendee.paid.then(|| {
        let marker = PaidMarker {
            x: PADDING,
            y: y_pos,
            size: PAID_MARKER_SIZE,
            background: Rgb::BLACK,
            glyph_color: Rgb::WHITE,
        };
        y_pos += PAID_MARKER_SIZE as i32 + 20;
        marker
    });

    let mut push_block = |kind: BlockKind,
                          lines: Vec<String>,
                          font_size: u32,
                          line_advance: i32,
                          y_pos: &mut i32| {
        if lines.is_empty() {
            return;
        }
        let height = line_advance * lines.len() as i32;
        text_blocks.push(TextBlock {
            kind,
            x: PADDING,
            y: *y_pos,
            font_size,
            line_advance,
            color: palette.text,
            lines,
        });
        *y_pos += height;
    };

    let name_lines = wrap_text(measure, &attendee.display_name(), FONT_NAME, TEXT_WIDTH, 2);
    push_block(BlockKind::Name, name_lines, FONT_NAME, ADVANCE_NAME, &mut y_pos);

    let entry_line = match style.entry_suffix(event_name, classification) {
        Some(suffix) if !attendee.entry_type.is_empty() => {
            format!("{} {}", attendee.entry_type, suffix)
        }
        Some(suffix) => suffix,
        None => attendee.entry_type.clone(),
    };
    if !entry_line.is_empty() {
        push_block(
            BlockKind::EntryType,
            vec![entry_line],
            FONT_ENTRY,
            ADVANCE_ENTRY,
            &mut y_pos,
        );
    }

    let event_lines = wrap_text(measure, event_name, FONT_ENTRY, TEXT_WIDTH, 2);
    push_block(BlockKind::EventName, event_lines, FONT_ENTRY, ADVANCE_ENTRY, &mut y_pos);

    let company_lines = wrap_text(measure, &attendee.company, FONT_COMPANY, TEXT_WIDTH, 3);
    push_block(
        BlockKind::Company,
        company_lines,
        FONT_COMPANY,
        ADVANCE_COMPANY,
        &mut y_pos,
    );

    if !attendee.days.is_empty() {
        push_block(
            BlockKind::Days,
            vec![attendee.days.clone()],
            FONT_DAYS,
            ADVANCE_DAYS,
            &mut y_pos,
        );
    }

    BadgeImageSpec {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        background: palette.background,
        banner,
        paid_marker,
        text_blocks,
        qr: qr_block(&attendee.attendee_id),
    }
}

/// Places the QR block: right 40% of the canvas, vertically centred, sized
/// at 75% of the available height and clamped so the block never leaves its
/// zone.
fn qr_block(attendee_id: &str) -> QrBlock {
    let available = CANVAS_HEIGHT as i32 - 2 * PADDING;
    let size = (available * 75 / 100).min(QR_ZONE - 2 * PADDING);
    let x = CANVAS_WIDTH as i32 - QR_ZONE + (QR_ZONE - size) / 2;
    let y = (CANVAS_HEIGHT as i32 - size) / 2;

    QrBlock {
        payload: attendee_id.to_string(),
        error_correction: QrEcLevel::Low,
        x,
        y,
        size: size as u32,
    }
}
