//! Text measurement and greedy word wrapping.
//!
//! The renderer wraps each text block against a pixel width budget. Width
//! measurement sits behind the [`TextMeasure`] trait so a host with real
//! font metrics can substitute its own; the default [`GlyphMetrics`] is a
//! deterministic average-advance approximation, which keeps the renderer
//! pure and its output stable for visual regression tests.

/// Measures the rendered width of a piece of text at a font size.
pub trait TextMeasure {
    /// Returns the width in pixels of `text` at `font_size`.
    fn text_width(&self, text: &str, font_size: u32) -> u32;
}

/// Default measure: a fixed average glyph advance per character.
///
/// Proportional fonts average a little over half an em per glyph; 55% is
/// close enough for layout budgeting and is exactly reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphMetrics;

/// Average glyph advance as a percentage of the font size.
const AVG_ADVANCE_PERCENT: u32 = 55;

impl TextMeasure for GlyphMetrics {
    fn text_width(&self, text: &str, font_size: u32) -> u32 {
        let glyphs = text.chars().count() as u32;
        glyphs * font_size * AVG_ADVANCE_PERCENT / 100
    }
}

/// Greedy word wrap against a pixel width budget.
///
/// Words are never split: a single word wider than the budget still gets a
/// line of its own. Output is truncated to `max_lines`; words that fall off
/// the end are silently dropped, which is the accepted label behavior.
///
/// # Example
///
/// ```
/// use checkin_engine::render::{GlyphMetrics, wrap_text};
///
/// let lines = wrap_text(&GlyphMetrics, "Granja Sol Sociedad Limitada", 60, 645, 3);
/// assert!(lines.len() <= 3);
/// assert!(lines.iter().all(|line| !line.is_empty()));
/// ```
pub fn wrap_text<M: TextMeasure>(
    measure: &M,
    text: &str,
    font_size: u32,
    max_width: u32,
    max_lines: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.text_width(&candidate, font_size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.truncate(max_lines);
    lines
}
