//! Text-show instructions and the sinks that receive them

use folio_font::{FontIdentity, LegacyEncoding, ResourceName};

use crate::geometry::Point;

/// Content of one shown line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineText {
    Unicode(String),
    /// Raw bytes in the font's legacy encoding
    Legacy {
        bytes: Vec<u8>,
        encoding: LegacyEncoding,
    },
}

impl LineText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LineText::Unicode(s) => Some(s),
            LineText::Legacy { .. } => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            LineText::Unicode(s) => s.as_bytes(),
            LineText::Legacy { bytes, .. } => bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// One positioned line of text, as emitted to a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextShow {
    /// Font the line is set in
    pub font: FontIdentity,
    /// Document-wide resource name of `font`
    pub resource: ResourceName,
    /// Font size in points
    pub size: f32,
    /// Start of the baseline
    pub baseline: Point,
    /// Measured advance width in points
    pub width: f32,
    pub text: LineText,
}

/// Receiver of text-show instructions (a page's content stream)
pub trait TextSink {
    fn show_text(&mut self, show: TextShow);
}

impl TextSink for Vec<TextShow> {
    fn show_text(&mut self, show: TextShow) {
        self.push(show);
    }
}

/// Text instructions recorded for one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    shows: Vec<TextShow>,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows(&self) -> &[TextShow] {
        &self.shows
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Resource names this page uses, in first-use order
    pub fn resources(&self) -> Vec<&ResourceName> {
        let mut seen = Vec::new();
        for show in &self.shows {
            if !seen.contains(&&show.resource) {
                seen.push(&show.resource);
            }
        }
        seen
    }
}

impl TextSink for PageContent {
    fn show_text(&mut self, show: TextShow) {
        self.shows.push(show);
    }
}
