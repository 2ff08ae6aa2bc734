//! Showing text
//!
//! A show call resolves its font and size, validates the text against the
//! font's encoding, splits it into lines and emits one instruction per line.
//! Every fallible step runs before the first instruction is emitted, so a
//! failed call leaves no output, no registration and no cursor movement.

use folio_font::Style;

use crate::content::{TextShow, TextSink};
use crate::encoding::EncodingValidator;
use crate::geometry::Point;
use crate::size::validate_size;
use crate::state::TextState;
use crate::Result;

/// A font named for a single call
#[derive(Debug, Clone, PartialEq)]
pub struct FontRequest {
    pub family: String,
    pub style: Style,
}

/// Per-call overrides; none of them outlive the call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowOptions {
    pub font: Option<FontRequest>,
    pub size: Option<f32>,
    /// First baseline; the document cursor is neither used nor moved
    pub position: Option<Point>,
}

impl ShowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn font(mut self, family: impl Into<String>, style: Style) -> Self {
        self.font = Some(FontRequest {
            family: family.into(),
            style,
        });
        self
    }
}

/// What a successful show call did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowReport {
    /// Instructions emitted (one per line)
    pub lines: usize,
    /// Total vertical advance in points
    pub advance: f32,
    /// Widest line in points
    pub width: f32,
}

/// Turns show requests into text-show instructions
pub struct TextRenderer;

impl TextRenderer {
    /// Show `text` into `sink`.
    ///
    /// Font: `options.font`, else the current font. Size: `options.size`,
    /// else the effective size. Each line advances by one line height; the
    /// cursor takes the total advance unless `options.position` was given.
    pub fn show(
        state: &mut TextState,
        sink: &mut dyn TextSink,
        text: &[u8],
        options: &ShowOptions,
    ) -> Result<ShowReport> {
        let font = match &options.font {
            Some(request) => state.fonts.select(&request.family, request.style)?,
            None => state.fonts.current().clone(),
        };
        let size = match options.size {
            Some(size) => validate_size(size)?,
            None => state.sizes.effective(),
        };

        let validated = EncodingValidator::check(text, &font)?;
        let lines = validated.lines();

        let metrics = font.metrics();
        let line_height = metrics.line_height(size);
        let (start, first_baseline) = match options.position {
            Some(position) => (position, position),
            None => (state.cursor, state.cursor.below(metrics.ascender(size))),
        };

        tracing::trace!(
            "show {} line(s) in {} at {}pt from ({}, {})",
            lines.len(),
            font.identity(),
            size,
            start.x,
            start.y
        );

        let mut resource = None;
        let mut widest = 0.0f32;
        for (i, line) in lines.iter().enumerate() {
            let resource = resource
                .get_or_insert_with(|| state.fonts.register(font.identity()))
                .clone();
            let width = line.width(metrics, size);
            widest = widest.max(width);

            sink.show_text(TextShow {
                font: font.identity().clone(),
                resource,
                size,
                baseline: first_baseline.below(i as f32 * line_height),
                width,
                text: line.to_line_text(),
            });
        }

        let advance = lines.len() as f32 * line_height;
        if options.position.is_none() {
            state.cursor = state.cursor.below(advance);
        }

        Ok(ShowReport {
            lines: lines.len(),
            advance,
            width: widest,
        })
    }

    /// Widest line of `text` under the same font and size resolution as
    /// [`TextRenderer::show`]
    pub fn measure(state: &TextState, text: &[u8], options: &ShowOptions) -> Result<f32> {
        let font = match &options.font {
            Some(request) => state.fonts.select(&request.family, request.style)?,
            None => state.fonts.current().clone(),
        };
        let size = match options.size {
            Some(size) => validate_size(size)?,
            None => state.sizes.effective(),
        };

        let validated = EncodingValidator::check(text, &font)?;
        Ok(validated
            .lines()
            .iter()
            .map(|line| line.width(font.metrics(), size))
            .fold(0.0, f32::max))
    }
}
