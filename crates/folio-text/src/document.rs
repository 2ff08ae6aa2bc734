//! Multi-page document
//!
//! A minimal page sequence around [`TextState`]: each page records its text
//! instructions, and starting a page resets the cursor while the font,
//! sizes and font registrations carry over.

use std::sync::Arc;

use folio_font::{MetricsProvider, Style};

use crate::config::TextConfig;
use crate::content::PageContent;
use crate::geometry::Point;
use crate::renderer::{ShowOptions, ShowReport};
use crate::size::{with_scoped_override, SizeScoped, SizeStack};
use crate::state::{CurrentFont, TextState};
use crate::{Result, TextError};

/// A document: text state plus recorded pages
#[derive(Debug)]
pub struct Document {
    state: TextState,
    /// Pages before the current one
    finished: Vec<PageContent>,
    current: PageContent,
}

impl Document {
    /// Document with default settings (12pt Helvetica)
    pub fn new() -> Result<Self> {
        Self::with_config(TextConfig::default())
    }

    pub fn with_config(config: TextConfig) -> Result<Self> {
        Self::with_provider(config, MetricsProvider::global())
    }

    pub fn with_provider(config: TextConfig, provider: Arc<MetricsProvider>) -> Result<Self> {
        let state = TextState::with_provider(&config, provider)?;
        tracing::debug!(
            "New document: {} {:?} {}pt",
            config.font_family,
            config.font_style,
            config.font_size
        );
        Ok(Self {
            state,
            finished: Vec::new(),
            current: PageContent::new(),
        })
    }

    pub fn state(&self) -> &TextState {
        &self.state
    }

    /// Select the current font by family, face name or font path
    pub fn font(&mut self, name: &str, style: Style) -> Result<()> {
        self.state.set_font(name, style)
    }

    pub fn current_font(&self) -> CurrentFont {
        self.state.font()
    }

    pub fn set_font_size(&mut self, size: f32) -> Result<()> {
        self.state.set_default_size(size)
    }

    /// Run `body` with `size` as the font size; restored however it exits
    pub fn font_size<R, E>(
        &mut self,
        size: f32,
        body: impl FnOnce(&mut Self) -> std::result::Result<R, E>,
    ) -> std::result::Result<R, E>
    where
        E: From<TextError>,
    {
        with_scoped_override(self, size, body)
    }

    /// Show text on the current page
    pub fn text(&mut self, text: impl AsRef<[u8]>, options: &ShowOptions) -> Result<ShowReport> {
        self.state.show(&mut self.current, text, options)
    }

    pub fn start_new_page(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
        self.state.start_new_page();
        tracing::debug!("Started page {}", self.page_count());
    }

    pub fn cursor(&self) -> Point {
        self.state.cursor()
    }

    /// Vertical cursor position
    pub fn y(&self) -> f32 {
        self.state.cursor().y
    }

    /// All pages in order, the current one last
    pub fn pages(&self) -> impl Iterator<Item = &PageContent> {
        self.finished.iter().chain(std::iter::once(&self.current))
    }

    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// (font name, size) of every instruction across all pages, in order
    pub fn font_settings(&self) -> Vec<(String, f32)> {
        self.pages()
            .flat_map(PageContent::shows)
            .map(|show| (show.font.name(), show.size))
            .collect()
    }

    /// Text of every Unicode instruction across all pages, in order
    pub fn strings(&self) -> Vec<&str> {
        self.pages()
            .flat_map(PageContent::shows)
            .filter_map(|show| show.text.as_str())
            .collect()
    }
}

impl SizeScoped for Document {
    fn size_stack_mut(&mut self) -> &mut SizeStack {
        &mut self.state.sizes
    }
}
