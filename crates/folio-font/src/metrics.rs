//! Per-font glyph widths and vertical metrics

use std::collections::HashMap;

use crate::encoding::FontEncoding;

/// Vertical metrics in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMetrics {
    /// Font units per em
    pub units_per_em: u16,
    /// Ascender (above baseline)
    pub ascender: i16,
    /// Descender (below baseline, usually negative)
    pub descender: i16,
    /// Extra space between lines
    pub line_gap: i16,
}

impl VerticalMetrics {
    /// Line height in font units (ascender - descender + line_gap)
    pub fn line_height(&self) -> i32 {
        i32::from(self.ascender) - i32::from(self.descender) + i32::from(self.line_gap)
    }
}

/// Glyph width storage
#[derive(Debug, Clone)]
pub(crate) enum GlyphWidths {
    /// Printable ASCII (32..=126) plus a short list of extra characters
    Ascii {
        table: &'static [u16; 95],
        extras: &'static [(char, u16)],
    },
    /// Every glyph has the same advance
    Fixed(u16),
    /// Character code -> advance, as read from a font's cmap
    Mapped(HashMap<u32, u16>),
}

/// Immutable metrics for one font identity
#[derive(Debug, Clone)]
pub struct Metrics {
    vertical: VerticalMetrics,
    default_width: u16,
    widths: GlyphWidths,
    encoding: FontEncoding,
}

impl Metrics {
    pub(crate) fn with_widths(
        vertical: VerticalMetrics,
        default_width: u16,
        widths: GlyphWidths,
        encoding: FontEncoding,
    ) -> Self {
        Self {
            vertical,
            default_width,
            widths,
            encoding,
        }
    }

    /// Build metrics from a code -> width table.
    ///
    /// Codes are Unicode scalar values for Unicode fonts and two-byte legacy
    /// codes for fonts declaring a legacy encoding.
    pub fn from_table(
        vertical: VerticalMetrics,
        default_width: u16,
        widths: HashMap<u32, u16>,
        encoding: FontEncoding,
    ) -> Self {
        Self::with_widths(vertical, default_width, GlyphWidths::Mapped(widths), encoding)
    }

    pub fn vertical(&self) -> VerticalMetrics {
        self.vertical
    }

    pub fn units_per_em(&self) -> u16 {
        self.vertical.units_per_em
    }

    /// Encoding this font expects its text in
    pub fn encoding(&self) -> FontEncoding {
        self.encoding
    }

    /// Width used for codes the font has no entry for
    pub fn default_width(&self) -> u16 {
        self.default_width
    }

    /// Advance of a character code in font units
    pub fn code_width(&self, code: u32) -> u16 {
        match &self.widths {
            GlyphWidths::Ascii { table, extras } => match code {
                32..=126 => table[(code - 32) as usize],
                _ => char::from_u32(code)
                    .and_then(|ch| extras.iter().find(|(c, _)| *c == ch))
                    .map(|(_, w)| *w)
                    .unwrap_or(self.default_width),
            },
            GlyphWidths::Fixed(width) => *width,
            GlyphWidths::Mapped(map) => map.get(&code).copied().unwrap_or(self.default_width),
        }
    }

    /// Advance of a character in font units
    pub fn char_width(&self, ch: char) -> u16 {
        self.code_width(u32::from(ch))
    }

    /// Sum of advances for a sequence of codes, in points at `size`
    pub fn codes_width(&self, codes: impl IntoIterator<Item = u32>, size: f32) -> f32 {
        let units: u64 = codes
            .into_iter()
            .map(|code| u64::from(self.code_width(code)))
            .sum();
        units as f32 * self.scale(size)
    }

    /// Width of a Unicode string in points at `size`
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        self.codes_width(text.chars().map(u32::from), size)
    }

    /// Ratio of line height to font size
    pub fn height_factor(&self) -> f32 {
        self.vertical.line_height() as f32 / f32::from(self.vertical.units_per_em)
    }

    /// Line height in points at `size`
    pub fn line_height(&self, size: f32) -> f32 {
        size * self.height_factor()
    }

    /// Ascender in points at `size`
    pub fn ascender(&self, size: f32) -> f32 {
        f32::from(self.vertical.ascender) * self.scale(size)
    }

    /// Descender in points at `size` (negative below the baseline)
    pub fn descender(&self, size: f32) -> f32 {
        f32::from(self.vertical.descender) * self.scale(size)
    }

    fn scale(&self, size: f32) -> f32 {
        size / f32::from(self.vertical.units_per_em)
    }
}
