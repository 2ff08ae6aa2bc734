//! Text Configuration

use folio_font::Style;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Per-document text defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Family, face name or font path selected when the document starts
    pub font_family: String,

    /// Style applied to `font_family`
    pub font_style: Style,

    /// Default font size in points
    pub font_size: f32,

    /// Where the cursor sits at the top of every page
    pub page_origin: Point,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_style: Style::Normal,
            font_size: 12.0,
            // US letter with half-inch margins
            page_origin: Point::new(36.0, 756.0),
        }
    }
}
