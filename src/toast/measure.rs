// SPDX-License-Identifier: MPL-2.0
//! Text measurement.
//!
//! The surface only needs to know how large its wrapped text will be. That
//! answer comes from whatever shapes text on the host platform, so it sits
//! behind [`TextMeasure`]. [`ParagraphMeasure`] shapes the text with the same
//! engine Iced renders it with. [`ApproximateMeasure`] is a renderer-free
//! fallback that wraps on word boundaries using terminal-style display widths.

use super::request::ToastFont;
use iced::advanced::graphics::text::Paragraph;
use iced::advanced::text::{self, Paragraph as _, Text};
use iced::{alignment, Pixels, Size};
use unicode_width::UnicodeWidthChar;

/// Measures wrapped text.
pub trait TextMeasure {
    /// Returns the size of `text` wrapped to at most `max_width`, with
    /// unbounded height.
    fn measure(&self, text: &str, font: &ToastFont, max_width: f32) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &ToastFont, f32) -> Size,
{
    fn measure(&self, text: &str, font: &ToastFont, max_width: f32) -> Size {
        self(text, font, max_width)
    }
}

/// Measures text by laying it out as an Iced paragraph.
///
/// Uses the defaults of the `text` widget (line height, shaping, word
/// wrapping), so a label rendered at the measured width wraps into the same
/// lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphMeasure;

impl TextMeasure for ParagraphMeasure {
    fn measure(&self, content: &str, font: &ToastFont, max_width: f32) -> Size {
        if content.trim().is_empty() {
            return Size::ZERO;
        }

        let paragraph = Paragraph::with_text(Text {
            content,
            bounds: Size::new(max_width, f32::INFINITY),
            size: Pixels(font.size),
            line_height: text::LineHeight::default(),
            font: font.face,
            align_x: text::Alignment::Default,
            align_y: alignment::Vertical::Top,
            shaping: text::Shaping::default(),
            wrapping: text::Wrapping::default(),
        });
        let bounds = paragraph.min_bounds();

        // Rounded up so the label never wraps earlier when laid out again.
        Size::new(bounds.width.ceil().min(max_width), bounds.height.ceil())
    }
}

/// Average glyph advance as a fraction of the font size.
const DEFAULT_ADVANCE_RATIO: f32 = 0.55;

/// Line height as a fraction of the font size.
const DEFAULT_LINE_HEIGHT_RATIO: f32 = 1.2;

/// Estimates text size from character display widths.
///
/// Each display column (wide CJK glyphs count as two) is assumed to advance
/// by `advance_ratio * font.size`. Lines break at whitespace when possible
/// and mid-word otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMeasure {
    pub advance_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for ApproximateMeasure {
    fn default() -> Self {
        Self {
            advance_ratio: DEFAULT_ADVANCE_RATIO,
            line_height_ratio: DEFAULT_LINE_HEIGHT_RATIO,
        }
    }
}

impl ApproximateMeasure {
    /// Splits `text` into the lines it would occupy, returning each line's
    /// width in pixels.
    fn line_widths(&self, text: &str, font: &ToastFont, max_width: f32) -> Vec<f32> {
        let advance = (self.advance_ratio * font.size).max(f32::EPSILON);
        let max_columns = ((max_width / advance).floor() as usize).max(1);

        let mut widths = Vec::new();
        for paragraph in text.split('\n') {
            let mut line = 0usize;
            for word in paragraph.split_whitespace() {
                let word_columns = display_columns(word);
                let needed = if line == 0 {
                    word_columns
                } else {
                    line + 1 + word_columns
                };

                if needed <= max_columns {
                    line = needed;
                    continue;
                }

                if line > 0 {
                    widths.push(line as f32 * advance);
                    line = 0;
                }

                if word_columns <= max_columns {
                    line = word_columns;
                } else {
                    // Hard-break words wider than a whole line.
                    for ch in word.chars() {
                        let w = ch.width().unwrap_or(0);
                        if line + w > max_columns && line > 0 {
                            widths.push(line as f32 * advance);
                            line = 0;
                        }
                        line += w;
                    }
                }
            }
            widths.push(line as f32 * advance);
        }
        widths
    }
}

impl TextMeasure for ApproximateMeasure {
    fn measure(&self, text: &str, font: &ToastFont, max_width: f32) -> Size {
        if text.trim().is_empty() {
            return Size::ZERO;
        }

        let widths = self.line_widths(text, font, max_width);
        let width = widths.iter().copied().fold(0.0, f32::max).min(max_width);
        let height = widths.len() as f32 * self.line_height_ratio * font.size;

        Size::new(width, height)
    }
}

fn display_columns(word: &str) -> usize {
    word.chars().map(|c| c.width().unwrap_or(0)).sum()
}
