//! Example: Basic usage of folio text placement

use folio_text::{Document, ShowOptions, Style, TextError};

fn main() -> Result<(), TextError> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = Document::new()?;
    doc.text("Hello from folio\nDefault 12pt Helvetica", &ShowOptions::new())?;

    doc.font("Times", Style::Bold)?;
    doc.font_size(18.0, |doc| doc.text("A larger heading", &ShowOptions::new()))?;

    doc.font("Courier", Style::Normal)?;
    doc.text("fixed pitch", &ShowOptions::new().size(10.0))?;

    doc.start_new_page();
    doc.text("Second page", &ShowOptions::new().at(72.0, 720.0))?;

    for (i, page) in doc.pages().enumerate() {
        println!("Page {}:", i + 1);
        for show in page.shows() {
            println!(
                "  /{} {}pt at ({:.1}, {:.1}) width {:.2}: {:?}",
                show.resource,
                show.size,
                show.baseline.x,
                show.baseline.y,
                show.width,
                show.text.as_str().unwrap_or_default()
            );
        }
    }

    Ok(())
}
