//! PDF rendering for the exported invoice.
//!
//! Turns the structured [`InvoiceDocument`] into PDF bytes entirely in
//! memory. The builtin Helvetica faces are used instead of font files:
//! there is no filesystem in the browser to load a family from, and the
//! invoice is plain tabular text.
//!
//! Layout is Letter with a uniform margin; the cursor walks down the
//! page and starts a fresh page when it runs out of room.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference};
use thiserror::Error;

use common::document::{DocumentSection, InvoiceDocument};
use common::model::invoice::format_money;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 16.0;
const LINE_MM: f32 = 6.0;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

// Column x positions for the line-item table.
const COL_NAME: f32 = MARGIN_MM;
const COL_QTY: f32 = 110.0;
const COL_UNIT: f32 = 140.0;
const COL_TOTAL: f32 = 175.0;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("font error: {0}")]
    Font(String),
    #[error("render error: {0}")]
    Render(String),
}

/// Renders the invoice document and returns the PDF bytes.
pub fn render_invoice(document: &InvoiceDocument) -> Result<Vec<u8>, PdfError> {
    let (doc, page, layer) = PdfDocument::new(
        "Keiro Invoice",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| PdfError::Font(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| PdfError::Font(err.to_string()))?;

    let mut cursor = Cursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        regular: &regular,
        bold: &bold,
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    write_header(&mut cursor, document);
    for section in &document.sections {
        write_section(&mut cursor, section);
    }
    write_totals(&mut cursor, document);

    cursor.blank();
    cursor.line(&document.footer, BODY_SIZE, false);

    doc.save_to_bytes()
        .map_err(|err| PdfError::Render(err.to_string()))
}

fn write_header(cursor: &mut Cursor<'_>, document: &InvoiceDocument) {
    cursor.line("Keiro", TITLE_SIZE, true);
    cursor.line("Order Summary", HEADING_SIZE, false);
    cursor.blank();

    let meta = &document.metadata;
    cursor.line(&format!("Invoice No: {}", meta.invoice_number), BODY_SIZE, false);
    cursor.line(&format!("Order No: {}", meta.order_number), BODY_SIZE, false);
    cursor.line(&format!("Delivery No: {}", meta.delivery_number), BODY_SIZE, false);
    cursor.line(&format!("Date: {}", meta.issued_on), BODY_SIZE, false);
    cursor.blank();
}

fn write_section(cursor: &mut Cursor<'_>, section: &DocumentSection) {
    if let Some(title) = &section.title {
        cursor.line(title, HEADING_SIZE, true);
    }

    cursor.row("Product", "Qty", "Unit ($)", "Total ($)", true);
    for row in &section.rows {
        cursor.row(
            &row.name,
            &row.quantity.to_string(),
            &format_money(row.unit_price),
            &format_money(row.line_total),
            false,
        );
    }
    cursor.blank();
}

fn write_totals(cursor: &mut Cursor<'_>, document: &InvoiceDocument) {
    let totals = &document.totals;
    cursor.line(&format!("Subtotal: ${}", format_money(totals.subtotal)), BODY_SIZE, false);
    cursor.line(&format!("Tax (8%): ${}", format_money(totals.tax)), BODY_SIZE, false);
    cursor.line(&format!("Delivery: ${}", format_money(totals.delivery)), BODY_SIZE, false);
    cursor.line(
        &format!("Discount (3%): -${}", format_money(totals.discount)),
        BODY_SIZE,
        false,
    );
    cursor.line(&format!("Total: ${}", format_money(totals.total)), BODY_SIZE, true);
}

/// Write position on the current page, with automatic page breaks.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    y: f32,
}

impl Cursor<'_> {
    fn font(&self, bold: bool) -> &IndirectFontRef {
        if bold {
            self.bold
        } else {
            self.regular
        }
    }

    fn ensure_room(&mut self) {
        if self.y < MARGIN_MM + LINE_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    /// One full-width text line starting at the left margin.
    fn line(&mut self, text: &str, size: f32, bold: bool) {
        self.ensure_room();
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), self.font(bold));
        self.y -= LINE_MM;
    }

    /// One table row across the four line-item columns.
    fn row(&mut self, name: &str, qty: &str, unit: &str, total: &str, bold: bool) {
        self.ensure_room();
        let font = self.font(bold);
        self.layer.use_text(name, BODY_SIZE, Mm(COL_NAME), Mm(self.y), font);
        self.layer.use_text(qty, BODY_SIZE, Mm(COL_QTY), Mm(self.y), font);
        self.layer.use_text(unit, BODY_SIZE, Mm(COL_UNIT), Mm(self.y), font);
        self.layer.use_text(total, BODY_SIZE, Mm(COL_TOTAL), Mm(self.y), font);
        self.y -= LINE_MM;
    }

    fn blank(&mut self) {
        self.y -= LINE_MM;
    }
}
