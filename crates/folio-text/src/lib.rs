//! folio Text - Text Placement Engine
//!
//! This crate places text on the pages of a folio document:
//! - Encoding validation (Unicode, or a font's legacy double-byte scheme)
//! - Default and scoped font sizes
//! - Line splitting, measurement and baseline placement
//! - Text-show instructions emitted to a page's content sink
//! - Vertical cursor advance across lines and pages

pub mod config;
pub mod content;
pub mod document;
pub mod encoding;
pub mod geometry;
pub mod renderer;
pub mod size;
pub mod state;

use folio_font::FontError;

pub use config::TextConfig;
pub use content::{LineText, PageContent, TextShow, TextSink};
pub use document::Document;
pub use encoding::{EncodingValidator, ValidatedText};
pub use geometry::Point;
pub use renderer::{FontRequest, ShowOptions, ShowReport, TextRenderer};
pub use size::{with_scoped_override, SizeScope, SizeScoped, SizeStack};
pub use state::{CurrentFont, TextState};

pub use folio_font::{FontIdentity, LegacyEncoding, StandardFont, Style};

/// Text placement error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextError {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error(
        "Incompatible string encoding: invalid UTF-8 at byte {valid_up_to}, \
         and font {font} declares no legacy encoding"
    )]
    IncompatibleStringEncoding { valid_up_to: usize, font: String },

    #[error("Invalid font size: {0}")]
    InvalidSize(f32),
}

impl TextError {
    /// Whether the error is a failure to resolve or load a font
    pub fn is_unknown_font(&self) -> bool {
        matches!(self, TextError::Font(_))
    }

    pub fn is_incompatible_encoding(&self) -> bool {
        matches!(self, TextError::IncompatibleStringEncoding { .. })
    }
}

pub type Result<T> = std::result::Result<T, TextError>;
