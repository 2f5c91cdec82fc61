//! PDF export
//!
//! Renders a [`QuoteDocument`] with genpdf. Layout is deliberately plain:
//! letterhead, position table, right-aligned summary.

use std::path::{Path, PathBuf};

use genpdf::{Alignment, Element, elements, style};
use thiserror::Error;

use super::document::{DocumentRow, QuoteDocument, RowKind, SummaryKind};

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Font family '{family}' not found in {dir}")]
    FontNotFound { dir: String, family: String },

    #[error("Layout failed: {0}")]
    Layout(String),

    #[error("Render failed: {0}")]
    Render(String),
}

pub type PrintResult<T> = Result<T, PrintError>;

/// Table column weights: Pos, Description, Qty, Unit price, Discount, VAT,
/// Amount, Final amount
const COLUMN_WEIGHTS: [usize; 8] = [1, 5, 1, 2, 1, 1, 2, 2];

/// Quote PDF renderer
///
/// Fonts are read from `font_dir` on every render, as
/// `{family}-Regular.ttf`, `{family}-Bold.ttf`, `{family}-Italic.ttf` and
/// `{family}-BoldItalic.ttf`.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    font_dir: PathBuf,
    font_family: String,
}

impl PdfRenderer {
    pub fn new(font_dir: impl Into<PathBuf>, font_family: impl Into<String>) -> Self {
        Self {
            font_dir: font_dir.into(),
            font_family: font_family.into(),
        }
    }

    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    fn load_fonts(&self) -> PrintResult<genpdf::fonts::FontFamily<genpdf::fonts::FontData>> {
        let not_found = || PrintError::FontNotFound {
            dir: self.font_dir.display().to_string(),
            family: self.font_family.clone(),
        };
        if !self.font_dir.is_dir() {
            return Err(not_found());
        }
        genpdf::fonts::from_files(&self.font_dir, &self.font_family, None).map_err(|e| {
            tracing::error!(error = %e, dir = %self.font_dir.display(), "Failed to load fonts");
            not_found()
        })
    }

    /// Render the document to PDF bytes
    pub fn render(&self, document: &QuoteDocument) -> PrintResult<Vec<u8>> {
        let fonts = self.load_fonts()?;

        let mut doc = genpdf::Document::new(fonts);
        doc.set_title(document.title.clone());
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // Letterhead
        if !document.company.name.is_empty() {
            doc.push(
                elements::Paragraph::new(document.company.name.clone())
                    .styled(style::Style::new().bold().with_font_size(16)),
            );
        }
        let small = style::Style::new().with_font_size(9);
        if let Some(address) = &document.company.address {
            doc.push(elements::Paragraph::new(address.clone()).styled(small));
        }
        if let Some(vat_id) = &document.company.vat_id {
            doc.push(elements::Paragraph::new(format!("USt-IdNr.: {vat_id}")).styled(small));
        }
        doc.push(elements::Break::new(1.5));

        doc.push(
            elements::Paragraph::new(document.title.clone())
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        if let Some(customer) = &document.customer {
            doc.push(elements::Paragraph::new(format!("Kunde: {customer}")));
        }
        doc.push(elements::Break::new(1));

        doc.push(self.position_table(&document.rows)?);
        doc.push(elements::Break::new(1));

        for line in &document.summary {
            let mut paragraph =
                elements::Paragraph::new(format!("{}: {}", line.label, line.value));
            paragraph.set_alignment(Alignment::Right);
            let line_style = if line.kind == SummaryKind::GrandTotal {
                style::Style::new().bold().with_font_size(12)
            } else {
                style::Style::new()
            };
            doc.push(paragraph.styled(line_style));
        }

        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| PrintError::Render(e.to_string()))?;

        tracing::debug!(
            offer_id = %document.offer_id,
            bytes = buffer.len(),
            "Quote PDF rendered"
        );
        Ok(buffer)
    }

    fn position_table(&self, rows: &[DocumentRow]) -> PrintResult<elements::TableLayout> {
        let mut table = elements::TableLayout::new(COLUMN_WEIGHTS.to_vec());
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let bold = style::Style::new().bold();
        let header = [
            "Pos.",
            "Bezeichnung",
            "Menge",
            "Einzelpreis",
            "Rabatt",
            "MwSt.",
            "Betrag",
            "Endbetrag",
        ];
        let mut row = table.row();
        for title in header {
            row = row.element(elements::Paragraph::new(title).styled(bold));
        }
        row.push().map_err(|e| PrintError::Layout(e.to_string()))?;

        for r in rows {
            let text_style = match r.kind {
                RowKind::Item | RowKind::Fee => style::Style::new(),
                RowKind::Filling | RowKind::Accessory => {
                    style::Style::new().italic().with_font_size(9)
                }
            };

            let mut description = elements::LinearLayout::vertical()
                .element(elements::Paragraph::new(r.description.clone()).styled(text_style));
            if let Some(detail) = &r.detail {
                for detail_line in detail.lines() {
                    description = description.element(
                        elements::Paragraph::new(detail_line.to_string())
                            .styled(style::Style::new().with_font_size(8)),
                    );
                }
            }

            table
                .row()
                .element(elements::Paragraph::new(r.position.clone()))
                .element(description)
                .element(right(&r.quantity, text_style))
                .element(right(&r.unit_price, text_style))
                .element(right(&r.discount, text_style))
                .element(right(&r.vat_rate, text_style))
                .element(right(&r.amount, text_style))
                .element(right(&r.final_amount, text_style))
                .push()
                .map_err(|e| PrintError::Layout(e.to_string()))?;
        }
        Ok(table)
    }
}

fn right(text: &str, text_style: style::Style) -> elements::StyledElement<elements::Paragraph> {
    let mut paragraph = elements::Paragraph::new(text.to_string());
    paragraph.set_alignment(Alignment::Right);
    paragraph.styled(text_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_offer;
    use crate::printing::CompanyInfo;
    use rust_decimal::Decimal;
    use shared::models::{Accessory, Filling, LineItem, Offer, OfferOptions};

    /// Temp font dir holding the bundled DejaVu Sans under all four styles
    fn font_dir(family: &str) -> tempfile::TempDir {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf");
        let dir = tempfile::tempdir().unwrap();
        for style in ["Regular", "Bold", "Italic", "BoldItalic"] {
            std::fs::copy(&fixture, dir.path().join(format!("{family}-{style}.ttf"))).unwrap();
        }
        dir
    }

    fn full_offer() -> Offer {
        Offer::new("o-1")
            .with_options(OfferOptions {
                global_discount_percent: Decimal::from(3),
                delivery_fee: Decimal::from(60),
                fee_vat_rate: Decimal::from(19),
                ..Default::default()
            })
            .with_item(
                LineItem::new("a")
                    .with_name("Fenster 2-flg.")
                    .with_dimensions(1230, 1480)
                    .with_color("RAL 9016")
                    .with_quantity(Decimal::TWO)
                    .with_unit_price(Decimal::from(600))
                    .with_discount_percent(Decimal::from(5))
                    .with_vat_rate(Decimal::from(19))
                    .with_filling(Filling::new("f-1", Decimal::from(80)).with_spec("3-fach"))
                    .with_accessory(Accessory {
                        code: "OLIVE".to_string(),
                        description: "Fenstergriff".to_string(),
                        qty: Decimal::TWO,
                    }),
            )
    }

    #[test]
    fn test_render_with_fonts_produces_pdf() {
        let dir = font_dir("DejaVuSans");
        let renderer = PdfRenderer::new(dir.path(), "DejaVuSans");

        let offer = full_offer();
        let company = CompanyInfo {
            name: "Fensterbau Muster GmbH".to_string(),
            address: Some("Hauptstr. 1, 12345 Musterstadt".to_string()),
            vat_id: Some("DE123456789".to_string()),
        };
        let document = QuoteDocument::build(&offer, &compute_offer(&offer), &company);

        let bytes = renderer.render(&document).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_render_empty_offer() {
        let dir = font_dir("DejaVuSans");
        let renderer = PdfRenderer::new(dir.path(), "DejaVuSans");

        let offer = Offer::new("o-2");
        let document =
            QuoteDocument::build(&offer, &compute_offer(&offer), &CompanyInfo::default());
        assert!(renderer.render(&document).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_font_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PdfRenderer::new(dir.path().join("nope"), "LiberationSans");

        let offer = Offer::new("o-1");
        let document =
            QuoteDocument::build(&offer, &compute_offer(&offer), &CompanyInfo::default());

        match renderer.render(&document) {
            Err(PrintError::FontNotFound { family, .. }) => assert_eq!(family, "LiberationSans"),
            other => panic!("expected FontNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_font_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PdfRenderer::new(dir.path(), "LiberationSans");

        let offer = Offer::new("o-1");
        let document =
            QuoteDocument::build(&offer, &compute_offer(&offer), &CompanyInfo::default());
        assert!(matches!(
            renderer.render(&document),
            Err(PrintError::FontNotFound { .. })
        ));
    }
}
