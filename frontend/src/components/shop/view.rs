//! View rendering for the shop component.
//!
//! Layout follows the classic comparison-shopping page: brand header,
//! centered search bar, a filter row (eco checkbox plus sort and group
//! selectors) that appears once there are results, and one table per
//! result group. A fixed cart icon opens the cart top sheet.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::invoice::format_money;
use common::model::offer::ProductOffer;
use common::pipeline::{GroupKey, ProductGroup, SortKey};

use super::dialogs::cart::cart_dialog;
use super::messages::Msg;
use super::state::ShopComponent;

/// Main view function: header, search, filters, grouped results, cart.
pub fn view(component: &ShopComponent, ctx: &Context<ShopComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container" style="max-width: 960px; margin: 0 auto; padding: 24px;">
            { build_header() }
            { build_cart_icon(component, link) }
            { build_search_bar(component, link) }
            {
                if !component.results.is_empty() {
                    build_filters(component, link)
                } else {
                    html! {}
                }
            }
            { build_results(component, link) }
            { cart_dialog(component, link) }
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div style="text-align: center; margin-bottom: 24px;">
            <h1>{"Keiro"}</h1>
            <p class="lead">{"Compare prices and find the best deals across multiple vendors."}</p>
        </div>
    }
}

/// Fixed cart button with the current line-item count. Hidden until the
/// first search produced results, matching the search-first page flow.
fn build_cart_icon(component: &ShopComponent, link: &Scope<ShopComponent>) -> Html {
    if component.results.is_empty() {
        return html! {};
    }
    html! {
        <div
            class="cart-icon"
            style="position: fixed; right: 20px; top: 120px; cursor: pointer; font-size: 1.5rem;"
            onclick={link.callback(|_| Msg::OpenCart)}
        >
            {"🛒"}
            <span class="cart-count" style="margin-left: 4px; font-size: 1rem;">
                { component.cart.len() }
            </span>
        </div>
    }
}

fn build_search_bar(component: &ShopComponent, link: &Scope<ShopComponent>) -> Html {
    html! {
        <div style="display: flex; justify-content: center; gap: 8px; margin-bottom: 24px;">
            <input
                type="text"
                placeholder="Search product"
                value={component.search_term.clone()}
                style="width: 50%; padding: 8px;"
                oninput={link.callback(|e: InputEvent| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    Msg::UpdateSearchTerm(input.value())
                })}
            />
            <button onclick={link.callback(|_| Msg::Search)} disabled={component.loading}>
                { if component.loading { "Searching…" } else { "Search" } }
            </button>
        </div>
    }
}

/// Filter row: eco checkbox plus the sort and grouping selectors.
fn build_filters(component: &ShopComponent, link: &Scope<ShopComponent>) -> Html {
    html! {
        <div class="filters-section" style="display: flex; justify-content: center; gap: 24px; align-items: center; margin-bottom: 24px;">
            <label>
                <input
                    type="checkbox"
                    checked={component.options.eco_only}
                    onchange={link.callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        Msg::SetEcoOnly(input.checked())
                    })}
                />
                {" Eco-Friendly Only"}
            </label>

            <label>
                {"Sort by: "}
                <select
                    value={component.options.sort_key.as_str()}
                    onchange={link.callback(|e: Event| {
                        let select = e.target_unchecked_into::<HtmlSelectElement>();
                        Msg::SetSortKey(SortKey::from_str(&select.value()))
                    })}
                >
                    {
                        SortKey::ALL.iter().map(|key| html! {
                            <option
                                value={key.as_str()}
                                selected={*key == component.options.sort_key}
                            >
                                { key.display_name() }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </label>

            <label>
                {"Group by: "}
                <select
                    value={component.options.group_key.as_str()}
                    onchange={link.callback(|e: Event| {
                        let select = e.target_unchecked_into::<HtmlSelectElement>();
                        Msg::SetGroupKey(GroupKey::from_str(&select.value()))
                    })}
                >
                    {
                        [GroupKey::ProductName, GroupKey::Vendor].iter().map(|key| html! {
                            <option
                                value={key.as_str()}
                                selected={*key == component.options.group_key}
                            >
                                { key.display_name() }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </label>
        </div>
    }
}

fn build_results(component: &ShopComponent, link: &Scope<ShopComponent>) -> Html {
    if component.view.is_empty() {
        return html! {
            <p style="text-align: center;">{"No products found matching your search."}</p>
        };
    }

    component
        .view
        .groups
        .iter()
        .map(|group| build_group_table(group, link))
        .collect::<Html>()
}

/// One result group: key heading plus a table of its offers.
fn build_group_table(group: &ProductGroup, link: &Scope<ShopComponent>) -> Html {
    html! {
        <div style="margin-bottom: 40px;">
            <h3>{ &group.key }</h3>
            <table class="results-table" style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr>
                        <th>{"Product"}</th>
                        <th>{"Vendor"}</th>
                        <th>{"Price ($)"}</th>
                        <th>{"Location"}</th>
                        <th>{"Eco-Friendly"}</th>
                        <th>{"Rating"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    { group.offers.iter().map(|offer| build_offer_row(offer, link)).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

fn build_offer_row(offer: &ProductOffer, link: &Scope<ShopComponent>) -> Html {
    let add_to_cart = {
        let offer = offer.clone();
        link.callback(move |_| Msg::AddToCart(offer.clone()))
    };

    html! {
        <tr key={offer.id.clone()}>
            <td>{ &offer.name }</td>
            <td>{ &offer.vendor }</td>
            <td>{ format_money(offer.price) }</td>
            <td>{ &offer.location }</td>
            <td>{ if offer.eco_friendly { "Yes" } else { "No" } }</td>
            <td>{ offer.rating }</td>
            <td>
                <button onclick={add_to_cart}>{"Add to Cart"}</button>
            </td>
        </tr>
    }
}
