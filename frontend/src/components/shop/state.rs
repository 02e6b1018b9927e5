//! Component state for the shop.
//!
//! Holds the raw search results as fetched plus everything derived from
//! them. `view` is never read back into `results`; it is recomputed from
//! `(results, options)` whenever either side changes.

use yew::prelude::*;

use common::model::cart::Cart;
use common::model::offer::ProductOffer;
use common::pipeline::{apply_view, GroupKey, GroupedView, ViewOptions};

/// Main state container for the [`ShopComponent`].
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ShopComponent {
    /// Current content of the search box.
    pub search_term: String,

    /// Offers matching the last successful search, in catalog order.
    /// A failed fetch leaves this untouched.
    pub results: Vec<ProductOffer>,

    /// Derived view: `results` filtered, sorted, and grouped per
    /// `options`. Recomputed via [`ShopComponent::refresh_view`].
    pub view: GroupedView,

    /// Eco filter, sort key, and grouping key driving the view.
    pub options: ViewOptions,

    /// The session cart. Append-only except for explicit removal.
    pub cart: Cart,

    /// Whether the cart top sheet is open.
    pub show_cart: bool,

    /// True while a catalog fetch is in flight.
    pub loading: bool,

    /// Token of the most recently issued search. Responses carrying an
    /// older token are dropped so a stale fetch can never overwrite a
    /// newer result set.
    pub request_generation: u64,

    /// Reference to the cart dialog/top-sheet container node.
    pub cart_dialog_ref: NodeRef,
}

impl ShopComponent {
    pub fn new(group_key: GroupKey) -> Self {
        let options = ViewOptions {
            group_key,
            ..ViewOptions::default()
        };
        Self {
            search_term: String::new(),
            results: Vec::new(),
            view: GroupedView::default(),
            options,
            cart: Cart::new(),
            show_cart: false,
            loading: false,
            request_generation: 0,
            cart_dialog_ref: Default::default(),
        }
    }

    /// Recomputes the grouped view from the current results and options.
    /// Called after every mutation of either.
    pub fn refresh_view(&mut self) {
        self.view = apply_view(&self.results, &self.options);
    }
}
