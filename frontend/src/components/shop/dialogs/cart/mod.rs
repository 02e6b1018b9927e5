//! Cart dialog: line items, the invoice breakdown, and the export action.
//!
//! Rendered inside the material top sheet; the invoice figures are
//! recomputed from the cart on every render, so the dialog never caches
//! monetary state.

use yew::html::Scope;
use yew::prelude::*;

use common::model::invoice::{format_money, Invoice};

use crate::components::shop::{Msg, ShopComponent};
use crate::top_sheet::material_top_sheet::MaterialTopSheet;

pub fn cart_dialog(component: &ShopComponent, link: &Scope<ShopComponent>) -> Html {
    // The top sheet node must stay mounted for the show/hide transition,
    // so only its contents are gated on `show_cart`.
    if !component.show_cart {
        return html! {
            <MaterialTopSheet node_ref={component.cart_dialog_ref.clone()} />
        };
    }

    let invoice = Invoice::compute(&component.cart);

    html! {
        <MaterialTopSheet node_ref={component.cart_dialog_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                <button
                    onclick={link.callback(|_| Msg::CloseCart)}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>

                <div style="background:#fff;border-radius:4px;padding:24px;width:400px;max-height:80vh;overflow-y:auto;">
                    <h4>{"Your Cart"}</h4>
                    { build_line_items(component, link) }
                    { build_totals(&invoice) }
                    <div style="display:flex;gap:8px;margin-top:16px;">
                        <button onclick={link.callback(|_| Msg::ExportInvoice)}>
                            {"Export PDF"}
                        </button>
                        <button onclick={link.callback(|_| Msg::CloseCart)}>
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </MaterialTopSheet>
    }
}

fn build_line_items(component: &ShopComponent, link: &Scope<ShopComponent>) -> Html {
    if component.cart.is_empty() {
        return html! { <p>{"Your cart is empty."}</p> };
    }

    html! {
        <ul style="list-style:none;padding:0;">
            {
                component.cart.items().iter().enumerate().map(|(index, item)| html! {
                    <li key={index} style="display:flex;justify-content:space-between;align-items:center;margin-bottom:8px;">
                        <span>
                            { format!(
                                "{} from {} - ${} x {}",
                                item.offer.name,
                                item.offer.vendor,
                                format_money(item.offer.price),
                                item.quantity
                            ) }
                        </span>
                        <button
                            title="Remove"
                            onclick={link.callback(move |_| Msg::RemoveFromCart(index))}
                            style="background:#d32f2f;color:#fff;border:none;border-radius:4px;cursor:pointer;padding:2px 8px;"
                        >
                            { "−" }
                        </button>
                    </li>
                }).collect::<Html>()
            }
        </ul>
    }
}

/// The five invoice figures. Rounding happens only here, at display time.
fn build_totals(invoice: &Invoice) -> Html {
    html! {
        <div class="totals">
            <p>{ format!("Subtotal: ${}", format_money(invoice.subtotal)) }</p>
            <p>{ format!("Tax (8%): ${}", format_money(invoice.tax)) }</p>
            <p>{ format!("Delivery: ${}", format_money(invoice.delivery)) }</p>
            <p>{ format!("Discount (3%): -${}", format_money(invoice.discount)) }</p>
            <p><strong>{ format!("Total Cost: ${}", format_money(invoice.total)) }</strong></p>
        </div>
    }
}
