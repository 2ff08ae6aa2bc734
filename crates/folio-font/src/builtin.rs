//! Built-in metrics for the fourteen standard faces
//!
//! Widths are the Adobe AFM advances in 1/1000 em for printable ASCII, plus
//! a handful of common punctuation outside it. Line height follows the
//! font bounding box, so the line gap is whatever the box adds above
//! ascender minus descender.

use crate::encoding::FontEncoding;
use crate::identity::StandardFont;
use crate::metrics::{GlyphWidths, Metrics, VerticalMetrics};

/// AFM header values for one face
struct FaceDescriptor {
    ascender: i16,
    descender: i16,
    /// FontBBox lower-left y and upper-right y
    bbox_y: (i16, i16),
    widths: WidthSource,
    default_width: u16,
}

enum WidthSource {
    Ascii(&'static [u16; 95], &'static [(char, u16)]),
    Fixed(u16),
    None,
}

static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

static TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

static TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

static TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

static TIMES_BOLD_ITALIC_WIDTHS: [u16; 95] = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

static HELVETICA_EXTRAS: [(char, u16); 11] = [
    ('©', 737), ('®', 737), ('°', 400), ('•', 350), ('–', 556), ('—', 1000),
    ('‘', 222), ('’', 222), ('“', 333), ('”', 333), ('…', 1000),
];

static HELVETICA_BOLD_EXTRAS: [(char, u16); 11] = [
    ('©', 737), ('®', 737), ('°', 400), ('•', 350), ('–', 556), ('—', 1000),
    ('‘', 278), ('’', 278), ('“', 500), ('”', 500), ('…', 1000),
];

static TIMES_ROMAN_EXTRAS: [(char, u16); 11] = [
    ('©', 760), ('®', 760), ('°', 400), ('•', 350), ('–', 500), ('—', 1000),
    ('‘', 333), ('’', 333), ('“', 444), ('”', 444), ('…', 1000),
];

static TIMES_BOLD_EXTRAS: [(char, u16); 11] = [
    ('©', 747), ('®', 747), ('°', 400), ('•', 350), ('–', 500), ('—', 1000),
    ('‘', 333), ('’', 333), ('“', 500), ('”', 500), ('…', 1000),
];

static TIMES_ITALIC_EXTRAS: [(char, u16); 11] = [
    ('©', 760), ('®', 760), ('°', 400), ('•', 350), ('–', 500), ('—', 889),
    ('‘', 333), ('’', 333), ('“', 556), ('”', 556), ('…', 889),
];

static TIMES_BOLD_ITALIC_EXTRAS: [(char, u16); 11] = [
    ('©', 747), ('®', 747), ('°', 400), ('•', 350), ('–', 500), ('—', 1000),
    ('‘', 333), ('’', 333), ('“', 500), ('”', 500), ('…', 1000),
];

fn descriptor(face: StandardFont) -> FaceDescriptor {
    use StandardFont::*;

    let (ascender, descender, bbox_y, widths, default_width) = match face {
        Courier => (629, -157, (-250, 805), WidthSource::Fixed(600), 600),
        CourierBold => (629, -157, (-250, 801), WidthSource::Fixed(600), 600),
        CourierOblique => (629, -157, (-250, 805), WidthSource::Fixed(600), 600),
        CourierBoldOblique => (629, -157, (-250, 801), WidthSource::Fixed(600), 600),
        Helvetica => (
            718,
            -207,
            (-225, 931),
            WidthSource::Ascii(&HELVETICA_WIDTHS, &HELVETICA_EXTRAS),
            556,
        ),
        HelveticaBold => (
            718,
            -207,
            (-228, 962),
            WidthSource::Ascii(&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_EXTRAS),
            556,
        ),
        HelveticaOblique => (
            718,
            -207,
            (-225, 931),
            WidthSource::Ascii(&HELVETICA_WIDTHS, &HELVETICA_EXTRAS),
            556,
        ),
        HelveticaBoldOblique => (
            718,
            -207,
            (-228, 962),
            WidthSource::Ascii(&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_EXTRAS),
            556,
        ),
        TimesRoman => (
            683,
            -217,
            (-218, 898),
            WidthSource::Ascii(&TIMES_ROMAN_WIDTHS, &TIMES_ROMAN_EXTRAS),
            500,
        ),
        TimesBold => (
            683,
            -217,
            (-218, 935),
            WidthSource::Ascii(&TIMES_BOLD_WIDTHS, &TIMES_BOLD_EXTRAS),
            500,
        ),
        TimesItalic => (
            683,
            -217,
            (-217, 883),
            WidthSource::Ascii(&TIMES_ITALIC_WIDTHS, &TIMES_ITALIC_EXTRAS),
            500,
        ),
        TimesBoldItalic => (
            683,
            -217,
            (-218, 921),
            WidthSource::Ascii(&TIMES_BOLD_ITALIC_WIDTHS, &TIMES_BOLD_ITALIC_EXTRAS),
            500,
        ),
        // No Ascender/Descender in the AFM; the bounding box stands in
        Symbol => (1010, -293, (-293, 1010), WidthSource::None, 500),
        ZapfDingbats => (820, -143, (-143, 820), WidthSource::None, 750),
    };

    FaceDescriptor {
        ascender,
        descender,
        bbox_y,
        widths,
        default_width,
    }
}

/// Metrics for a standard face
pub fn metrics(face: StandardFont) -> Metrics {
    let desc = descriptor(face);
    let (bbox_low, bbox_high) = desc.bbox_y;
    let line_gap = (bbox_high - bbox_low) - (desc.ascender - desc.descender);

    let vertical = VerticalMetrics {
        units_per_em: 1000,
        ascender: desc.ascender,
        descender: desc.descender,
        line_gap,
    };

    let widths = match desc.widths {
        WidthSource::Ascii(table, extras) => GlyphWidths::Ascii { table, extras },
        WidthSource::Fixed(width) => GlyphWidths::Fixed(width),
        WidthSource::None => GlyphWidths::Fixed(desc.default_width),
    };

    Metrics::with_widths(vertical, desc.default_width, widths, FontEncoding::Unicode)
}
