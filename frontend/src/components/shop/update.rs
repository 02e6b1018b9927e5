//! Update function for the shop component.
//!
//! A single `update` function in Elm style: it receives the current
//! `ShopComponent` state, the `Context`, and a `Msg`, mutates the state,
//! and returns whether the view should re-render.
//!
//! Key behaviors
//! - Search: validate the term, fetch the catalog, filter it to exact
//!   name matches. Each search carries a generation token; responses
//!   from superseded searches are dropped.
//! - View options: every change to the eco filter, sort key, or group
//!   key recomputes the grouped view synchronously.
//! - Cart: quantity prompt -> validation -> append-only add; explicit
//!   removal; no merging of identical offers.
//! - Export: assemble the invoice document, render it to PDF bytes, and
//!   hand them to the browser as a download.

use gloo_console::{debug, error};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::document::{DocumentLayout, InvoiceDocument, InvoiceMetadata, FILE_NAME};
use common::pipeline::{filter_catalog, validate_search_term};

use crate::net::fetch_catalog;
use crate::pdf::render_invoice;
use crate::top_sheet::material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{alert, current_date_string, prompt_quantity, reference, show_toast,
    trigger_download};
use super::messages::Msg;
use super::state::ShopComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render, `false` when only side effects occur.
pub fn update(component: &mut ShopComponent, ctx: &Context<ShopComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateSearchTerm(term) => {
            component.search_term = term;
            true
        }
        Msg::Search => {
            let term = match validate_search_term(&component.search_term) {
                Ok(term) => term,
                Err(err) => {
                    alert(&err.to_string());
                    return false;
                }
            };

            component.request_generation += 1;
            component.loading = true;
            let generation = component.request_generation;
            debug!("search issued", term.as_str(), generation as f64);

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_catalog().await {
                    Ok(catalog) => {
                        let offers = filter_catalog(&catalog, &term);
                        link.send_message(Msg::CatalogLoaded { generation, offers });
                    }
                    Err(err) => {
                        link.send_message(Msg::CatalogFailed { generation, error: err });
                    }
                }
            });
            true
        }
        Msg::CatalogLoaded { generation, offers } => {
            if generation != component.request_generation {
                debug!("dropping stale search response", generation as f64);
                return false;
            }
            component.loading = false;
            component.results = offers;
            component.refresh_view();
            true
        }
        Msg::CatalogFailed { generation, error } => {
            if generation != component.request_generation {
                return false;
            }
            component.loading = false;
            error!("catalog fetch failed:", error.to_string());
            show_toast("Could not reach the product source. Please try again.");
            // Previous results stay on screen; a new search retries.
            true
        }
        Msg::SetEcoOnly(eco_only) => {
            component.options.eco_only = eco_only;
            component.refresh_view();
            true
        }
        Msg::SetSortKey(sort_key) => {
            component.options.sort_key = sort_key;
            component.refresh_view();
            true
        }
        Msg::SetGroupKey(group_key) => {
            component.options.group_key = group_key;
            component.refresh_view();
            true
        }
        Msg::AddToCart(offer) => {
            let Some(input) = prompt_quantity() else {
                return false;
            };
            match input.trim().parse::<u32>() {
                Ok(quantity) => match component.cart.add_item(offer, quantity) {
                    Ok(()) => {
                        show_toast("Added to cart.");
                        true
                    }
                    Err(err) => {
                        alert(&err.to_string());
                        false
                    }
                },
                Err(_) => {
                    alert("Invalid quantity.");
                    false
                }
            }
        }
        Msg::RemoveFromCart(index) => {
            component.cart.remove_item(index);
            true
        }
        Msg::OpenCart => {
            component.show_cart = true;
            open_top_sheet(component.cart_dialog_ref.clone());
            true
        }
        Msg::CloseCart => {
            component.show_cart = false;
            close_top_sheet(component.cart_dialog_ref.clone());
            true
        }
        Msg::ExportInvoice => {
            let metadata = InvoiceMetadata {
                invoice_number: reference("INV"),
                order_number: reference("ORD"),
                delivery_number: reference("DLV"),
                issued_on: current_date_string(),
            };
            let document =
                InvoiceDocument::build(&component.cart, metadata, DocumentLayout::ByVendor);

            match render_invoice(&document) {
                Ok(bytes) => {
                    if let Err(err) = trigger_download(&bytes, FILE_NAME, "application/pdf") {
                        error!("invoice download failed:", err);
                        show_toast("Could not download the invoice.");
                    }
                }
                Err(err) => {
                    error!("invoice rendering failed:", err.to_string());
                    show_toast("Could not generate the invoice PDF.");
                }
            }
            false
        }
    }
}
