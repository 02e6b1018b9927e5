//! Price comparison shop: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ShopProps`, `ShopComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - The component owns all UI state (search term, results, cart, view
//!   options) and recomputes the grouped view synchronously after every
//!   mutation that affects it; nothing re-renders implicitly.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ShopProps;
pub use state::ShopComponent;

impl Component for ShopComponent {
    type Message = Msg;
    type Properties = ShopProps;

    fn create(ctx: &Context<Self>) -> Self {
        ShopComponent::new(ctx.props().initial_group_key)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
