//! Integration tests - font selection through to emitted instructions
//!
//! Drives the public API the way a document does: select fonts, set sizes,
//! show text across pages, and inspect what each page recorded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_font::{
    FontEncoding, FontError, FontLoader, LegacyEncoding, Metrics, MetricsProvider, VerticalMetrics,
};
use folio_text::{
    Document, FontIdentity, Point, ShowOptions, StandardFont, Style, TextConfig, TextError,
    TextState,
};

const COMIC: &str = "data/fonts/comicsans.ttf";
const GKAI: &str = "data/fonts/gkai00mp.ttf";

/// Stand-in for font files on disk
struct FixtureLoader;

impl FontLoader for FixtureLoader {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        [COMIC, GKAI].contains(&name).then(|| PathBuf::from(name))
    }

    fn load(&self, path: &Path) -> Result<Metrics, FontError> {
        let vertical = VerticalMetrics {
            units_per_em: 2048,
            ascender: 1802,
            descender: -455,
            line_gap: 0,
        };
        if path == Path::new(GKAI) {
            // "日本" in Shift_JIS
            let widths = HashMap::from([(0x93FA, 2048), (0x967B, 2048)]);
            Ok(Metrics::from_table(
                vertical,
                1024,
                widths,
                FontEncoding::Legacy(LegacyEncoding::ShiftJis),
            ))
        } else {
            let widths = HashMap::from([(u32::from('a'), 1100)]);
            Ok(Metrics::from_table(vertical, 1000, widths, FontEncoding::Unicode))
        }
    }
}

fn provider() -> Arc<MetricsProvider> {
    Arc::new(MetricsProvider::with_loader(FixtureLoader))
}

fn create_doc() -> Document {
    Document::with_provider(TextConfig::default(), provider()).unwrap()
}

fn sizes(doc: &Document) -> Vec<f32> {
    doc.font_settings().into_iter().map(|(_, size)| size).collect()
}

fn names(doc: &Document) -> Vec<String> {
    doc.font_settings().into_iter().map(|(name, _)| name).collect()
}

// ============================================================================
// FONT METRICS
// ============================================================================

#[test]
fn test_defaults_to_helvetica() {
    let doc = create_doc();
    let font = doc.current_font();
    assert_eq!(font.identity(), &FontIdentity::Builtin(StandardFont::Helvetica));
    assert_eq!(font.size(), 12.0);
}

#[test]
fn test_metrics_follow_current_font() {
    let provider = provider();
    let mut doc = Document::with_provider(TextConfig::default(), Arc::clone(&provider)).unwrap();

    doc.font("Courier", Style::Normal).unwrap();
    let courier = provider
        .metrics(&FontIdentity::Builtin(StandardFont::Courier))
        .unwrap();
    assert!(Arc::ptr_eq(doc.current_font().metrics(), &courier));

    doc.font(COMIC, Style::Normal).unwrap();
    let comic = provider.metrics(&FontIdentity::external(COMIC)).unwrap();
    assert!(Arc::ptr_eq(doc.current_font().metrics(), &comic));
}

#[test]
fn test_select_all_builtin_variants_loads_once() {
    let provider = provider();
    let state = TextState::with_provider(&TextConfig::default(), Arc::clone(&provider)).unwrap();
    let baseline = provider.load_count();

    let mut seen = Vec::new();
    for family in ["Courier", "Helvetica", "Times"] {
        for style in Style::ALL {
            let a = state.fonts().select(family, style).unwrap();
            let b = state.fonts().select(family, style).unwrap();
            assert_eq!(a.identity(), b.identity());
            assert!(!seen.contains(a.identity()), "{family} {style:?} not distinct");
            seen.push(a.identity().clone());
        }
    }

    // Helvetica normal was loaded when the state was created
    assert_eq!(provider.load_count(), baseline + 11);
}

// ============================================================================
// FONT STYLES
// ============================================================================

#[test]
fn test_font_style_by_family() {
    let mut doc = create_doc();

    doc.font("Courier", Style::Bold).unwrap();
    doc.text("In Courier bold", &ShowOptions::new()).unwrap();

    doc.font("Courier", Style::BoldItalic).unwrap();
    doc.text("In Courier bold-italic", &ShowOptions::new()).unwrap();

    doc.font("Courier", Style::Italic).unwrap();
    doc.text("In Courier italic", &ShowOptions::new()).unwrap();

    doc.font("Courier", Style::Normal).unwrap();
    doc.text("In Normal Courier", &ShowOptions::new()).unwrap();

    doc.font("Helvetica", Style::Normal).unwrap();
    doc.text("In Normal Helvetica", &ShowOptions::new()).unwrap();

    assert_eq!(
        names(&doc),
        vec![
            "Courier-Bold",
            "Courier-BoldOblique",
            "Courier-Oblique",
            "Courier",
            "Helvetica"
        ]
    );
}

#[test]
fn test_style_ignored_for_external_font() {
    let mut doc = create_doc();
    doc.font(COMIC, Style::Bold).unwrap();
    assert_eq!(doc.current_font().identity(), &FontIdentity::external(COMIC));
}

// ============================================================================
// CURSOR ADVANCE
// ============================================================================

#[test]
fn test_advances_by_font_height() {
    let mut doc = create_doc();
    let height = doc.current_font().height();

    let position = doc.y();
    doc.text("Foo", &ShowOptions::new()).unwrap();
    let single = position - doc.y();
    assert!((single - height).abs() < 1e-4);

    let position = doc.y();
    doc.text("Foo\nBar\nBaz", &ShowOptions::new()).unwrap();
    let triple = position - doc.y();
    assert!((triple - 3.0 * height).abs() < 1e-3);
    assert!((triple - 3.0 * single).abs() < 1e-3);
}

#[test]
fn test_lines_emitted_in_order() {
    let mut doc = create_doc();
    doc.text("one\ntwo\n\nfour", &ShowOptions::new()).unwrap();
    assert_eq!(doc.strings(), vec!["one", "two", "", "four"]);
}

#[test]
fn test_crlf_breaks_keep_lone_carriage_returns() {
    let mut doc = create_doc();
    doc.text("abc\r", &ShowOptions::new()).unwrap();
    doc.text("x\ry", &ShowOptions::new()).unwrap();
    doc.text("one\r\ntwo", &ShowOptions::new()).unwrap();
    assert_eq!(doc.strings(), vec!["abc\r", "x\ry", "one", "two"]);
}

#[test]
fn test_empty_text_is_noop() {
    let mut doc = create_doc();
    let before = doc.cursor();
    let report = doc.text("", &ShowOptions::new()).unwrap();
    assert_eq!(report.lines, 0);
    assert_eq!(doc.cursor(), before);
    assert!(doc.font_settings().is_empty());
    assert_eq!(doc.state().fonts().registered_count(), 0);
}

#[test]
fn test_explicit_position_keeps_cursor() {
    let mut doc = create_doc();
    let before = doc.cursor();
    doc.text("Blah\nBlaz", &ShowOptions::new().at(100.0, 100.0)).unwrap();
    assert_eq!(doc.cursor(), before);

    let shows = doc.pages().next().unwrap().shows();
    assert_eq!(shows[0].baseline, Point::new(100.0, 100.0));
    assert!(shows[1].baseline.y < 100.0);
}

// ============================================================================
// FONT SIZES
// ============================================================================

#[test]
fn test_default_12_point_helvetica() {
    let mut doc = create_doc();
    doc.text("Blah", &ShowOptions::new().at(100.0, 100.0)).unwrap();
    assert_eq!(doc.font_settings(), vec![("Helvetica".to_string(), 12.0)]);
    assert_eq!(doc.strings(), vec!["Blah"]);
}

#[test]
fn test_call_size() {
    let mut doc = create_doc();
    doc.text("Blah", &ShowOptions::new().at(100.0, 100.0).size(16.0))
        .unwrap();
    assert_eq!(sizes(&doc), vec![16.0]);
}

#[test]
fn test_default_size() {
    let mut doc = create_doc();
    doc.set_font_size(16.0).unwrap();
    doc.text("Blah", &ShowOptions::new()).unwrap();
    assert_eq!(sizes(&doc), vec![16.0]);
}

#[test]
fn test_call_size_overrides_default_once() {
    let mut doc = create_doc();
    doc.set_font_size(16.0).unwrap();

    doc.text("Blah", &ShowOptions::new().size(11.0)).unwrap();
    doc.text("Blaz", &ShowOptions::new()).unwrap();

    assert_eq!(sizes(&doc), vec![11.0, 16.0]);
    assert_eq!(doc.state().sizes().default_size(), 16.0);
}

#[test]
fn test_size_block() {
    let mut doc = create_doc();

    doc.font_size(16.0, |doc| doc.text("Blah", &ShowOptions::new()))
        .unwrap();
    doc.text("blah", &ShowOptions::new()).unwrap();

    assert_eq!(sizes(&doc), vec![16.0, 12.0]);
}

#[test]
fn test_call_size_inside_size_block() {
    let mut doc = create_doc();

    doc.font_size(16.0, |doc| -> Result<(), TextError> {
        doc.text("Foo", &ShowOptions::new())?;
        doc.text("Blah", &ShowOptions::new().size(11.0))?;
        doc.text("Blaz", &ShowOptions::new())?;
        Ok(())
    })
    .unwrap();

    assert_eq!(sizes(&doc), vec![16.0, 11.0, 16.0]);
}

#[test]
fn test_nested_size_blocks() {
    let mut doc = create_doc();

    doc.font_size(16.0, |doc| -> Result<(), TextError> {
        doc.text("a", &ShowOptions::new())?;
        doc.font_size(20.0, |doc| -> Result<(), TextError> {
            doc.text("b", &ShowOptions::new())?;
            doc.font_size(8.0, |doc| doc.text("c", &ShowOptions::new()))?;
            doc.text("d", &ShowOptions::new())?;
            Ok(())
        })?;
        doc.text("e", &ShowOptions::new())?;
        Ok(())
    })
    .unwrap();
    doc.text("f", &ShowOptions::new()).unwrap();

    assert_eq!(sizes(&doc), vec![16.0, 20.0, 8.0, 20.0, 16.0, 12.0]);
    assert_eq!(doc.state().sizes().depth(), 0);
}

#[test]
fn test_size_block_unwinds_on_failure() {
    let mut doc = create_doc();

    let result = doc.font_size(16.0, |doc| -> Result<(), TextError> {
        doc.text("ok", &ShowOptions::new())?;
        doc.font_size(20.0, |doc| doc.text(b"bad \xDD", &ShowOptions::new()))?;
        doc.text("unreached", &ShowOptions::new())?;
        Ok(())
    });

    assert!(result.unwrap_err().is_incompatible_encoding());
    assert_eq!(doc.current_font().size(), 12.0);
    assert_eq!(doc.state().sizes().depth(), 0);
    assert_eq!(doc.strings(), vec!["ok"]);
}

#[test]
fn test_call_font_does_not_change_current() {
    let mut doc = create_doc();

    doc.text("x", &ShowOptions::new().font("Times", Style::Bold))
        .unwrap();
    doc.text("y", &ShowOptions::new()).unwrap();

    assert_eq!(names(&doc), vec!["Times-Bold", "Helvetica"]);
    assert_eq!(
        doc.current_font().identity(),
        &FontIdentity::Builtin(StandardFont::Helvetica)
    );
}

// ============================================================================
// REGISTRATION AND PAGES
// ============================================================================

#[test]
fn test_builtin_fonts_on_the_fly() {
    let mut doc = create_doc();
    doc.font("Times-Roman", Style::Normal).unwrap();
    doc.text("Blah", &ShowOptions::new().at(100.0, 100.0)).unwrap();
    doc.font("Courier", Style::Normal).unwrap();
    doc.text("Blaz", &ShowOptions::new().at(150.0, 150.0)).unwrap();

    assert_eq!(names(&doc), vec!["Times-Roman", "Courier"]);
}

#[test]
fn test_same_font_across_pages() {
    let mut doc = create_doc();
    doc.text("Blah", &ShowOptions::new().at(100.0, 100.0)).unwrap();
    doc.start_new_page();
    doc.text("Blaz", &ShowOptions::new().at(150.0, 150.0)).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(names(&doc), vec!["Helvetica", "Helvetica"]);

    let helvetica = FontIdentity::Builtin(StandardFont::Helvetica);
    let fonts = doc.state().fonts();
    assert_eq!(fonts.registered_count(), 1);
    let name = fonts.resource_name(&helvetica).unwrap();

    for page in doc.pages() {
        assert_eq!(page.resources(), vec![name]);
    }
}

#[test]
fn test_resource_names_in_first_use_order() {
    let mut doc = create_doc();
    doc.font("Courier", Style::Normal).unwrap();
    doc.text("a", &ShowOptions::new()).unwrap();
    doc.font("Helvetica", Style::Normal).unwrap();
    doc.text("b", &ShowOptions::new()).unwrap();
    doc.start_new_page();
    doc.font("Courier", Style::Normal).unwrap();
    doc.text("c", &ShowOptions::new()).unwrap();

    let resources: Vec<String> = doc
        .pages()
        .flat_map(|page| page.shows())
        .map(|show| show.resource.to_string())
        .collect();
    assert_eq!(resources, vec!["F1", "F2", "F1"]);
}

#[test]
fn test_new_page_resets_cursor_keeps_font_and_size() {
    let mut doc = create_doc();
    let top = doc.cursor();
    doc.font("Times", Style::Italic).unwrap();
    doc.set_font_size(18.0).unwrap();
    doc.text("Foo\nBar", &ShowOptions::new()).unwrap();
    assert!(doc.y() < top.y);

    doc.start_new_page();

    assert_eq!(doc.cursor(), top);
    let font = doc.current_font();
    assert_eq!(font.identity(), &FontIdentity::Builtin(StandardFont::TimesItalic));
    assert_eq!(font.size(), 18.0);
}

#[test]
fn test_unknown_font() {
    let mut doc = create_doc();
    let err = doc.font("Pao bu", Style::Normal).unwrap_err();
    assert!(err.is_unknown_font());
    assert_eq!(err, TextError::Font(FontError::UnknownFont("Pao bu".into())));
}

#[test]
fn test_unknown_call_font_leaves_no_trace() {
    let mut doc = create_doc();
    let before = doc.cursor();
    let err = doc
        .text("x", &ShowOptions::new().font("Pao bu", Style::Normal))
        .unwrap_err();
    assert!(err.is_unknown_font());
    assert_eq!(doc.cursor(), before);
    assert!(doc.font_settings().is_empty());
}

// ============================================================================
// ENCODINGS
// ============================================================================

#[test]
fn test_utf8_with_builtin_font() {
    let mut doc = create_doc();
    doc.text("©", &ShowOptions::new()).unwrap();
    assert_eq!(doc.strings(), vec!["©"]);
}

#[test]
fn test_invalid_utf8_rejected() {
    let mut doc = create_doc();
    let before = doc.cursor();

    let err = doc.text(b"Blah \xDD", &ShowOptions::new()).unwrap_err();

    assert!(err.is_incompatible_encoding());
    assert_eq!(doc.cursor(), before);
    assert_eq!(doc.state().fonts().registered_count(), 0);
    assert!(doc.font_settings().is_empty());
}

#[test]
fn test_shift_jis_with_legacy_font() {
    let mut doc = create_doc();
    let sjis: &[u8] = &[0x93, 0xFA, 0x96, 0x7B];

    doc.font(GKAI, Style::Normal).unwrap();
    let report = doc.text(sjis, &ShowOptions::new()).unwrap();

    assert_eq!(report.lines, 1);
    // Two full-em glyphs at 12pt
    assert!((report.width - 24.0).abs() < 1e-4);

    let show = &doc.pages().next().unwrap().shows()[0];
    assert_eq!(show.text.as_bytes(), sjis);
    assert_eq!(show.font, FontIdentity::external(GKAI));
}

#[test]
fn test_shift_jis_with_unicode_font_rejected() {
    let mut doc = create_doc();
    let sjis: &[u8] = &[0x93, 0xFA, 0x96, 0x7B];

    doc.font(COMIC, Style::Normal).unwrap();
    let err = doc.text(sjis, &ShowOptions::new()).unwrap_err();
    assert!(err.is_incompatible_encoding());
}
