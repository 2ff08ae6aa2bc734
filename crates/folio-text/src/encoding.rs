//! Encoding gate for text input
//!
//! Text arrives as bytes. For Unicode fonts the bytes must be valid UTF-8;
//! fonts that declare a legacy double-byte encoding take the bytes as-is
//! and map them through their own cmap. Nothing is repaired or dropped.

use folio_font::{FontEncoding, FontHandle, LegacyEncoding, Metrics};

use crate::content::LineText;
use crate::{Result, TextError};

/// Text accepted for a particular font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedText<'a> {
    Unicode(&'a str),
    Legacy {
        bytes: &'a [u8],
        encoding: LegacyEncoding,
    },
}

impl<'a> ValidatedText<'a> {
    pub fn is_empty(&self) -> bool {
        match self {
            ValidatedText::Unicode(s) => s.is_empty(),
            ValidatedText::Legacy { bytes, .. } => bytes.is_empty(),
        }
    }

    /// Split on `\n` (a preceding `\r` belongs to the break).
    ///
    /// Empty input has no lines; otherwise N breaks give N + 1 lines, empty
    /// ones included.
    pub fn lines(&self) -> Vec<ValidatedText<'a>> {
        if self.is_empty() {
            return Vec::new();
        }

        // Only segments followed by a `\n` can end in the `\r` of a CRLF
        match *self {
            ValidatedText::Unicode(s) => {
                let last = s.matches('\n').count();
                s.split('\n')
                    .enumerate()
                    .map(|(i, line)| {
                        let line = if i < last {
                            line.strip_suffix('\r').unwrap_or(line)
                        } else {
                            line
                        };
                        ValidatedText::Unicode(line)
                    })
                    .collect()
            }
            ValidatedText::Legacy { bytes, encoding } => {
                let last = bytes.iter().filter(|b| **b == b'\n').count();
                bytes
                    .split(|b| *b == b'\n')
                    .enumerate()
                    .map(|(i, line)| ValidatedText::Legacy {
                        bytes: if i < last {
                            line.strip_suffix(b"\r").unwrap_or(line)
                        } else {
                            line
                        },
                        encoding,
                    })
                    .collect()
            }
        }
    }

    /// Width in points at `size`
    pub fn width(&self, metrics: &Metrics, size: f32) -> f32 {
        match *self {
            ValidatedText::Unicode(s) => metrics.text_width(s, size),
            ValidatedText::Legacy { bytes, encoding } => {
                metrics.codes_width(encoding.codes(bytes), size)
            }
        }
    }

    pub fn to_line_text(&self) -> LineText {
        match *self {
            ValidatedText::Unicode(s) => LineText::Unicode(s.to_string()),
            ValidatedText::Legacy { bytes, encoding } => LineText::Legacy {
                bytes: bytes.to_vec(),
                encoding,
            },
        }
    }
}

/// Checks text bytes against the encoding a font expects
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingValidator;

impl EncodingValidator {
    pub fn check<'a>(text: &'a [u8], font: &FontHandle) -> Result<ValidatedText<'a>> {
        match font.metrics().encoding() {
            FontEncoding::Legacy(encoding) => Ok(ValidatedText::Legacy {
                bytes: text,
                encoding,
            }),
            FontEncoding::Unicode => std::str::from_utf8(text)
                .map(ValidatedText::Unicode)
                .map_err(|e| {
                    tracing::debug!("Rejected text for {}: {}", font.identity(), e);
                    TextError::IncompatibleStringEncoding {
                        valid_up_to: e.valid_up_to(),
                        font: font.identity().name(),
                    }
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_font::{FontRegistry, MetricsProvider, Style};
    use std::sync::Arc;

    fn helvetica() -> FontHandle {
        let reg = FontRegistry::new(Arc::new(MetricsProvider::new()), "Helvetica", Style::Normal)
            .unwrap();
        reg.current().clone()
    }

    #[test]
    fn test_utf8_accepted() {
        let font = helvetica();
        let text = EncodingValidator::check("©".as_bytes(), &font).unwrap();
        assert_eq!(text, ValidatedText::Unicode("©"));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let font = helvetica();
        let err = EncodingValidator::check(b"Blah \xDD", &font).unwrap_err();
        assert_eq!(
            err,
            TextError::IncompatibleStringEncoding {
                valid_up_to: 5,
                font: "Helvetica".into()
            }
        );
    }

    #[test]
    fn test_lines() {
        assert!(ValidatedText::Unicode("").lines().is_empty());
        assert_eq!(ValidatedText::Unicode("a\nb\nc").lines().len(), 3);
        assert_eq!(ValidatedText::Unicode("\n\n").lines().len(), 3);
        assert_eq!(
            ValidatedText::Unicode("a\r\nb").lines(),
            vec![ValidatedText::Unicode("a"), ValidatedText::Unicode("b")]
        );
    }

    #[test]
    fn test_lone_carriage_return_is_content() {
        assert_eq!(
            ValidatedText::Unicode("abc\r").lines(),
            vec![ValidatedText::Unicode("abc\r")]
        );
        assert_eq!(
            ValidatedText::Unicode("x\ry").lines(),
            vec![ValidatedText::Unicode("x\ry")]
        );
        assert_eq!(
            ValidatedText::Unicode("a\r\nb\r").lines(),
            vec![ValidatedText::Unicode("a"), ValidatedText::Unicode("b\r")]
        );

        let text = ValidatedText::Legacy {
            bytes: &[0x93, 0xFA, b'\r'],
            encoding: LegacyEncoding::ShiftJis,
        };
        assert_eq!(text.lines(), vec![text]);
    }

    #[test]
    fn test_legacy_lines() {
        let text = ValidatedText::Legacy {
            bytes: &[0x93, 0xFA, b'\n', 0x96, 0x7B],
            encoding: LegacyEncoding::ShiftJis,
        };
        let lines = text.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            ValidatedText::Legacy {
                bytes: &[0x96, 0x7B],
                encoding: LegacyEncoding::ShiftJis
            }
        );
    }
}
