//! Cart contents: an append-only list of line items.
//!
//! Re-adding an offer never merges with an existing line item; each
//! successful add appends a fresh snapshot. The cart is session-scoped
//! and never cleared implicitly. Only the explicit remove operation
//! shrinks it.

use serde::{Deserialize, Serialize};

use crate::error::ShopError;
use crate::model::offer::ProductOffer;

/// An offer plus the quantity the user picked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub offer: ProductOffer,
    /// Always >= 1; enforced by [`Cart::add_item`].
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity, unrounded.
    pub fn line_total(&self) -> f64 {
        self.offer.price * f64::from(self.quantity)
    }
}

/// The user's current cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new line item with a snapshot of `offer`.
    ///
    /// A quantity of zero is a validation error and leaves the cart
    /// unchanged. Identical offers are not merged; adding the same offer
    /// twice produces two line items.
    pub fn add_item(&mut self, offer: ProductOffer, quantity: u32) -> Result<(), ShopError> {
        if quantity == 0 {
            return Err(ShopError::Validation("Invalid quantity.".to_string()));
        }
        self.items.push(LineItem { offer, quantity });
        Ok(())
    }

    /// Removes the line item at `index`. Out-of-range indexes are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals. Zero for an empty cart.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(name: &str, vendor: &str, price: f64) -> ProductOffer {
        ProductOffer {
            id: format!("{name}-{vendor}"),
            name: name.to_string(),
            vendor: vendor.to_string(),
            price,
            location: "Springfield".to_string(),
            eco_friendly: false,
            rating: 4.0,
            image_url: None,
        }
    }

    #[test]
    fn empty_cart_has_zero_subtotal() {
        assert_eq!(Cart::new().subtotal(), 0.0);
    }

    #[test]
    fn zero_quantity_is_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        let err = cart.add_item(offer("Widget", "A", 10.0), 0).unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn readding_the_same_offer_appends_instead_of_merging() {
        let mut cart = Cart::new();
        cart.add_item(offer("Widget", "A", 10.0), 2).unwrap();
        cart.add_item(offer("Widget", "A", 10.0), 3).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), 50.0);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add_item(offer("Widget", "A", 20.0), 3).unwrap();
        cart.add_item(offer("Gadget", "B", 5.0), 1).unwrap();
        assert_eq!(cart.subtotal(), 65.0);
    }

    #[test]
    fn remove_item_drops_only_the_given_index() {
        let mut cart = Cart::new();
        cart.add_item(offer("Widget", "A", 10.0), 1).unwrap();
        cart.add_item(offer("Gadget", "B", 5.0), 1).unwrap();
        cart.remove_item(0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].offer.name, "Gadget");

        // Out-of-range removal is a no-op.
        cart.remove_item(7);
        assert_eq!(cart.len(), 1);
    }
}
