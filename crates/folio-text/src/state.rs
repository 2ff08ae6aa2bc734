//! Per-document text state
//!
//! [`TextState`] owns everything a document's text calls mutate: the font
//! registry, the size stack and the cursor. It is not shared between
//! documents; calls against one state are serialized by `&mut`.

use std::sync::Arc;

use folio_font::{FontHandle, FontIdentity, FontRegistry, Metrics, MetricsProvider, Style};

use crate::config::TextConfig;
use crate::content::TextSink;
use crate::geometry::Point;
use crate::renderer::{ShowOptions, ShowReport, TextRenderer};
use crate::size::{with_scoped_override, SizeScope, SizeScoped, SizeStack};
use crate::{Result, TextError};

/// The current font at the effective size
#[derive(Debug, Clone)]
pub struct CurrentFont {
    handle: FontHandle,
    size: f32,
}

impl CurrentFont {
    pub fn identity(&self) -> &FontIdentity {
        self.handle.identity()
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        self.handle.metrics()
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Line height at the effective size
    pub fn height(&self) -> f32 {
        self.metrics().line_height(self.size)
    }

    pub fn ascender(&self) -> f32 {
        self.metrics().ascender(self.size)
    }

    pub fn descender(&self) -> f32 {
        self.metrics().descender(self.size)
    }

    /// Width of a Unicode string at the effective size
    pub fn width_of(&self, text: &str) -> f32 {
        self.metrics().text_width(text, self.size)
    }
}

/// Font, size and cursor state of one document
#[derive(Debug)]
pub struct TextState {
    pub(crate) fonts: FontRegistry,
    pub(crate) sizes: SizeStack,
    pub(crate) cursor: Point,
    origin: Point,
}

impl TextState {
    /// Create state backed by the process-wide metrics cache
    pub fn new(config: &TextConfig) -> Result<Self> {
        Self::with_provider(config, MetricsProvider::global())
    }

    pub fn with_provider(config: &TextConfig, provider: Arc<MetricsProvider>) -> Result<Self> {
        let fonts = FontRegistry::new(provider, &config.font_family, config.font_style)?;
        let sizes = SizeStack::new(config.font_size)?;

        Ok(Self {
            fonts,
            sizes,
            cursor: config.page_origin,
            origin: config.page_origin,
        })
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn sizes(&self) -> &SizeStack {
        &self.sizes
    }

    /// Make `name` (family, face name or font path) the current font
    pub fn set_font(&mut self, name: &str, style: Style) -> Result<()> {
        self.fonts.set_font(name, style)?;
        Ok(())
    }

    pub fn font(&self) -> CurrentFont {
        CurrentFont {
            handle: self.fonts.current().clone(),
            size: self.sizes.effective(),
        }
    }

    pub fn set_default_size(&mut self, size: f32) -> Result<()> {
        self.sizes.set_default(size)
    }

    pub fn effective_size(&self) -> f32 {
        self.sizes.effective()
    }

    /// Enter a scoped size override; it ends when the guard drops
    pub fn scoped_size(&mut self, size: f32) -> Result<SizeScope<'_, Self>> {
        SizeScope::enter(self, size)
    }

    /// Run `body` with `size` as the innermost override
    pub fn with_size<R, E>(
        &mut self,
        size: f32,
        body: impl FnOnce(&mut Self) -> std::result::Result<R, E>,
    ) -> std::result::Result<R, E>
    where
        E: From<TextError>,
    {
        with_scoped_override(self, size, body)
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Page-transition hook: back to the top of the page.
    ///
    /// Font and sizes carry over to the new page.
    pub fn start_new_page(&mut self) {
        self.cursor = self.origin;
    }

    /// Show `text` into `sink`; see [`TextRenderer::show`]
    pub fn show(
        &mut self,
        sink: &mut dyn TextSink,
        text: impl AsRef<[u8]>,
        options: &ShowOptions,
    ) -> Result<ShowReport> {
        TextRenderer::show(self, sink, text.as_ref(), options)
    }

    /// Widest line of `text` in points, without emitting anything
    pub fn width_of(&self, text: impl AsRef<[u8]>, options: &ShowOptions) -> Result<f32> {
        TextRenderer::measure(self, text.as_ref(), options)
    }
}

impl SizeScoped for TextState {
    fn size_stack_mut(&mut self) -> &mut SizeStack {
        &mut self.sizes
    }
}
