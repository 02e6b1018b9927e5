//! Shared core for the Keiro price comparison app.
//!
//! Everything decision-shaped lives here so it can be unit tested on the
//! host: the product/cart/invoice data model, the search result view
//! pipeline (filter, sort, group), and the invoice document assembly that
//! feeds the PDF renderer in the frontend.

pub mod document;
pub mod error;
pub mod model;
pub mod pipeline;
