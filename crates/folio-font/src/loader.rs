//! External font loading
//!
//! [`FontLoader`] is the seam between font resolution and the font files on
//! disk. [`TtfLoader`] is the default, reading TrueType/OpenType files with
//! ttf-parser.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ttf_parser::{Face, PlatformId};

use crate::encoding::{FontEncoding, LegacyEncoding};
use crate::metrics::{Metrics, VerticalMetrics};
use crate::{FontError, Result};

/// Source of external font files
pub trait FontLoader: Send + Sync {
    /// Resolve a font name to a loadable file, or `None` if there is none
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Read metrics and the encoding declaration from a located file
    fn load(&self, path: &Path) -> Result<Metrics>;
}

/// TrueType/OpenType loader backed by ttf-parser
#[derive(Debug, Default, Clone)]
pub struct TtfLoader {
    /// Legacy encodings declared by the caller, keyed by resolved path
    declared: HashMap<PathBuf, LegacyEncoding>,
}

impl TtfLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that the font at `path` takes text in a legacy encoding.
    ///
    /// Takes precedence over what the font's cmap advertises.
    pub fn declare_encoding(&mut self, path: impl AsRef<Path>, encoding: LegacyEncoding) {
        let path = path.as_ref();
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.declared.insert(key, encoding);
    }

    pub fn with_encoding(mut self, path: impl AsRef<Path>, encoding: LegacyEncoding) -> Self {
        self.declare_encoding(path, encoding);
        self
    }

    /// Parse font bytes into metrics
    pub fn parse(&self, path: &Path, data: &[u8]) -> Result<Metrics> {
        let face = Face::parse(data, 0).map_err(|e| FontError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let cmap = face.tables().cmap.ok_or_else(|| FontError::Parse {
            path: path.to_path_buf(),
            reason: "font has no cmap table".into(),
        })?;

        let detected = cmap.subtables.into_iter().find_map(|subtable| {
            (subtable.platform_id == PlatformId::Windows)
                .then(|| LegacyEncoding::from_windows_encoding_id(subtable.encoding_id))
                .flatten()
        });
        let has_unicode = cmap.subtables.into_iter().any(|subtable| subtable.is_unicode());

        let encoding = match self.declared.get(path) {
            Some(declared) => FontEncoding::Legacy(*declared),
            None => match detected {
                Some(legacy) if !has_unicode => FontEncoding::Legacy(legacy),
                _ => FontEncoding::Unicode,
            },
        };

        // Legacy codes are never looked up in a Unicode subtable
        let subtable = match encoding {
            FontEncoding::Legacy(legacy) => {
                let found = cmap.subtables.into_iter().find(|s| {
                    s.platform_id == PlatformId::Windows
                        && s.encoding_id == legacy.windows_encoding_id()
                });
                if found.is_none() {
                    tracing::warn!(
                        "{} has no {:?} cmap subtable, all codes use the default width",
                        path.display(),
                        legacy
                    );
                }
                found
            }
            FontEncoding::Unicode => cmap.subtables.into_iter().find(|s| s.is_unicode()),
        };

        let mut widths = HashMap::new();
        if let Some(subtable) = subtable {
            subtable.codepoints(|code| {
                if let Some(advance) = subtable
                    .glyph_index(code)
                    .and_then(|gid| face.glyph_hor_advance(gid))
                {
                    widths.insert(code, advance);
                }
            });
        }

        let units_per_em = face.units_per_em();
        let default_width = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .unwrap_or(units_per_em / 2);

        let vertical = VerticalMetrics {
            units_per_em,
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
        };

        tracing::debug!(
            "Parsed {}: {} glyph widths, {:?}",
            path.display(),
            widths.len(),
            encoding
        );

        Ok(Metrics::from_table(vertical, default_width, widths, encoding))
    }
}

impl FontLoader for TtfLoader {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if path.is_file() {
            std::fs::canonicalize(path).ok()
        } else {
            None
        }
    }

    fn load(&self, path: &Path) -> Result<Metrics> {
        let data = std::fs::read(path).map_err(|e| FontError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.parse(path, &data)
    }
}
