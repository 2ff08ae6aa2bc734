//! Font identities and style variants
//!
//! A [`FontIdentity`] is what a font request resolves to: one of the
//! fourteen standard faces, or an external font file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Style variant of a font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Normal, Style::Bold, Style::Italic, Style::BoldItalic];

    fn index(self) -> usize {
        match self {
            Style::Normal => 0,
            Style::Bold => 1,
            Style::Italic => 2,
            Style::BoldItalic => 3,
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "regular" => Ok(Style::Normal),
            "bold" => Ok(Style::Bold),
            "italic" | "oblique" => Ok(Style::Italic),
            "bold_italic" | "bolditalic" | "bold-italic" => Ok(Style::BoldItalic),
            other => Err(format!("unknown font style: {other}")),
        }
    }
}

/// The fourteen standard PDF faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Symbol,
    ZapfDingbats,
}

/// Built-in families with four style variants each, indexed by [`Style`]
static FAMILIES: &[(&str, [StandardFont; 4])] = &[
    (
        "Courier",
        [
            StandardFont::Courier,
            StandardFont::CourierBold,
            StandardFont::CourierOblique,
            StandardFont::CourierBoldOblique,
        ],
    ),
    (
        "Helvetica",
        [
            StandardFont::Helvetica,
            StandardFont::HelveticaBold,
            StandardFont::HelveticaOblique,
            StandardFont::HelveticaBoldOblique,
        ],
    ),
    (
        "Times",
        [
            StandardFont::TimesRoman,
            StandardFont::TimesBold,
            StandardFont::TimesItalic,
            StandardFont::TimesBoldItalic,
        ],
    ),
    (
        "Times-Roman",
        [
            StandardFont::TimesRoman,
            StandardFont::TimesBold,
            StandardFont::TimesItalic,
            StandardFont::TimesBoldItalic,
        ],
    ),
];

impl StandardFont {
    pub const ALL: [StandardFont; 14] = [
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
        StandardFont::TimesItalic,
        StandardFont::TimesBoldItalic,
        StandardFont::Symbol,
        StandardFont::ZapfDingbats,
    ];

    /// PostScript name as written into the document
    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Resolve a family or face name plus style to a standard face.
    ///
    /// Family names pick one of four variants. Face names select that face
    /// and ignore `style`. Matching is ASCII case-insensitive.
    pub fn resolve(name: &str, style: Style) -> Option<StandardFont> {
        if let Some((_, variants)) = FAMILIES
            .iter()
            .find(|(family, _)| family.eq_ignore_ascii_case(name))
        {
            return Some(variants[style.index()]);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|face| face.postscript_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

/// Resolved, canonical reference to a renderable font
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontIdentity {
    /// One of the standard faces, backed by built-in metrics
    Builtin(StandardFont),
    /// An external font file, keyed by its resolved path
    External(Arc<Path>),
}

impl FontIdentity {
    pub fn external(path: impl Into<PathBuf>) -> Self {
        FontIdentity::External(Arc::from(path.into()))
    }

    /// Name of the font as a PDF inspector would report it.
    ///
    /// External fonts report their file stem.
    pub fn name(&self) -> String {
        match self {
            FontIdentity::Builtin(face) => face.postscript_name().to_string(),
            FontIdentity::External(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontIdentity::Builtin(_))
    }
}

impl From<StandardFont> for FontIdentity {
    fn from(face: StandardFont) -> Self {
        FontIdentity::Builtin(face)
    }
}

impl fmt::Display for FontIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontIdentity::Builtin(face) => f.write_str(face.postscript_name()),
            FontIdentity::External(path) => write!(f, "{}", path.display()),
        }
    }
}
