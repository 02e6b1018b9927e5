//! Invoice document assembly.
//!
//! Builds the structured, renderer-agnostic document for an exported
//! order summary: header metadata, line-item rows (grouped by vendor or
//! flat), the totals block, and a footer. Turning this structure into
//! actual PDF bytes is the renderer's job (`frontend::pdf`); the
//! aggregator's responsibility ends here.

use serde::{Deserialize, Serialize};

use crate::model::cart::Cart;
use crate::model::invoice::Invoice;

/// Fixed download name for the exported order summary.
pub const FILE_NAME: &str = "keiro_invoice.pdf";

/// Footer line printed at the bottom of the document.
pub const FOOTER: &str = "Thank you for shopping with Keiro!";

/// Header metadata captured by the caller at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    pub invoice_number: String,
    pub order_number: String,
    pub delivery_number: String,
    /// Issue date, already formatted for display.
    pub issued_on: String,
}

/// How line items are arranged in the document body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentLayout {
    /// One section per vendor, in first-seen cart order.
    #[default]
    ByVendor,
    /// A single untitled section listing the cart in order.
    Flat,
}

/// One table row: product, quantity, unit price, line total.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// A titled run of rows. `title` is `None` for the flat layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSection {
    pub title: Option<String>,
    pub rows: Vec<DocumentRow>,
}

/// The complete document handed to the PDF renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub metadata: InvoiceMetadata,
    pub sections: Vec<DocumentSection>,
    pub totals: Invoice,
    pub footer: String,
}

impl InvoiceDocument {
    /// Assembles rows and totals from the cart.
    ///
    /// With [`DocumentLayout::ByVendor`] the line items are partitioned
    /// into one section per vendor, vendors ordered by first appearance
    /// in the cart and rows keeping cart order within each section.
    pub fn build(cart: &Cart, metadata: InvoiceMetadata, layout: DocumentLayout) -> Self {
        let sections = match layout {
            DocumentLayout::ByVendor => {
                let mut sections: Vec<DocumentSection> = Vec::new();
                for item in cart.items() {
                    let vendor = &item.offer.vendor;
                    let row = row_for(item);
                    match sections
                        .iter_mut()
                        .find(|s| s.title.as_deref() == Some(vendor.as_str()))
                    {
                        Some(section) => section.rows.push(row),
                        None => sections.push(DocumentSection {
                            title: Some(vendor.clone()),
                            rows: vec![row],
                        }),
                    }
                }
                sections
            }
            DocumentLayout::Flat => vec![DocumentSection {
                title: None,
                rows: cart.items().iter().map(row_for).collect(),
            }],
        };

        InvoiceDocument {
            metadata,
            sections,
            totals: Invoice::compute(cart),
            footer: FOOTER.to_string(),
        }
    }
}

fn row_for(item: &crate::model::cart::LineItem) -> DocumentRow {
    DocumentRow {
        name: item.offer.name.clone(),
        quantity: item.quantity,
        unit_price: item.offer.price,
        line_total: item.line_total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::offer::ProductOffer;

    fn offer(name: &str, vendor: &str, price: f64) -> ProductOffer {
        ProductOffer {
            id: format!("{name}-{vendor}"),
            name: name.to_string(),
            vendor: vendor.to_string(),
            price,
            location: "Springfield".to_string(),
            eco_friendly: true,
            rating: 4.0,
            image_url: None,
        }
    }

    fn metadata() -> InvoiceMetadata {
        InvoiceMetadata {
            invoice_number: "INV-1234".to_string(),
            order_number: "ORD-5678".to_string(),
            delivery_number: "DLV-9012".to_string(),
            issued_on: "2026-08-29".to_string(),
        }
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(offer("Widget", "Acme", 20.0), 3).unwrap();
        cart.add_item(offer("Gadget", "Globex", 5.0), 1).unwrap();
        cart.add_item(offer("Doohickey", "Acme", 2.5), 2).unwrap();
        cart
    }

    #[test]
    fn vendor_layout_groups_rows_by_first_seen_vendor() {
        let doc = InvoiceDocument::build(&sample_cart(), metadata(), DocumentLayout::ByVendor);
        let titles: Vec<Option<&str>> =
            doc.sections.iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(titles, [Some("Acme"), Some("Globex")]);
        assert_eq!(doc.sections[0].rows.len(), 2);
        assert_eq!(doc.sections[0].rows[0].name, "Widget");
        assert_eq!(doc.sections[0].rows[1].name, "Doohickey");
    }

    #[test]
    fn flat_layout_keeps_cart_order_in_one_section() {
        let doc = InvoiceDocument::build(&sample_cart(), metadata(), DocumentLayout::Flat);
        assert_eq!(doc.sections.len(), 1);
        assert!(doc.sections[0].title.is_none());
        let names: Vec<&str> = doc.sections[0].rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Widget", "Gadget", "Doohickey"]);
    }

    #[test]
    fn rows_carry_quantity_unit_price_and_line_total() {
        let doc = InvoiceDocument::build(&sample_cart(), metadata(), DocumentLayout::Flat);
        let widget = &doc.sections[0].rows[0];
        assert_eq!(widget.quantity, 3);
        assert_eq!(widget.unit_price, 20.0);
        assert_eq!(widget.line_total, 60.0);
    }

    #[test]
    fn totals_and_metadata_pass_through() {
        let doc = InvoiceDocument::build(&sample_cart(), metadata(), DocumentLayout::ByVendor);
        assert_eq!(doc.totals, Invoice::compute(&sample_cart()));
        assert_eq!(doc.metadata.invoice_number, "INV-1234");
        assert_eq!(doc.footer, FOOTER);
        assert_eq!(FILE_NAME, "keiro_invoice.pdf");
    }

    #[test]
    fn empty_cart_builds_a_document_with_no_rows_but_full_totals() {
        let cart = Cart::new();
        let doc = InvoiceDocument::build(&cart, metadata(), DocumentLayout::ByVendor);
        assert!(doc.sections.is_empty());
        assert_eq!(doc.totals.delivery, 112.0);
    }
}
