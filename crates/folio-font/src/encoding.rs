//! Text encodings a font can declare
//!
//! Most fonts take Unicode text. Some CJK fonts are addressed through a
//! legacy double-byte scheme instead; their text is handed through as raw
//! bytes and decoded against the font's own legacy cmap.

use serde::{Deserialize, Serialize};

/// Encoding a font expects its text in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontEncoding {
    /// Unicode text (UTF-8 on input)
    #[default]
    Unicode,
    /// A legacy multi-byte scheme; bytes bypass Unicode validation
    Legacy(LegacyEncoding),
}

impl FontEncoding {
    pub fn is_legacy(self) -> bool {
        matches!(self, FontEncoding::Legacy(_))
    }
}

/// Legacy CJK double-byte encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyEncoding {
    ShiftJis,
    Gbk,
    Big5,
    Wansung,
    Johab,
}

impl LegacyEncoding {
    /// Map a Windows-platform cmap encoding id to a legacy encoding
    pub fn from_windows_encoding_id(id: u16) -> Option<Self> {
        match id {
            2 => Some(LegacyEncoding::ShiftJis),
            3 => Some(LegacyEncoding::Gbk),
            4 => Some(LegacyEncoding::Big5),
            5 => Some(LegacyEncoding::Wansung),
            6 => Some(LegacyEncoding::Johab),
            _ => None,
        }
    }

    /// Windows-platform cmap encoding id for this encoding
    pub fn windows_encoding_id(self) -> u16 {
        match self {
            LegacyEncoding::ShiftJis => 2,
            LegacyEncoding::Gbk => 3,
            LegacyEncoding::Big5 => 4,
            LegacyEncoding::Wansung => 5,
            LegacyEncoding::Johab => 6,
        }
    }

    /// Whether `byte` starts a two-byte character
    pub fn is_lead_byte(self, byte: u8) -> bool {
        match self {
            LegacyEncoding::ShiftJis => matches!(byte, 0x81..=0x9F | 0xE0..=0xFC),
            LegacyEncoding::Gbk | LegacyEncoding::Big5 | LegacyEncoding::Wansung => {
                matches!(byte, 0x81..=0xFE)
            }
            LegacyEncoding::Johab => matches!(byte, 0x84..=0xD3 | 0xD8..=0xDE | 0xE0..=0xF9),
        }
    }

    /// Split `bytes` into character codes.
    ///
    /// A lead byte joins the following byte into `(lead << 8) | trail`. A lead
    /// byte with nothing after it stands alone.
    pub fn codes(self, bytes: &[u8]) -> LegacyCodes<'_> {
        LegacyCodes {
            encoding: self,
            bytes,
            pos: 0,
        }
    }
}

/// Iterator over the character codes of legacy-encoded bytes
#[derive(Debug, Clone)]
pub struct LegacyCodes<'a> {
    encoding: LegacyEncoding,
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for LegacyCodes<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let lead = *self.bytes.get(self.pos)?;
        self.pos += 1;

        if self.encoding.is_lead_byte(lead) {
            if let Some(&trail) = self.bytes.get(self.pos) {
                self.pos += 1;
                return Some(u32::from(lead) << 8 | u32::from(trail));
            }
        }
        Some(u32::from(lead))
    }
}
