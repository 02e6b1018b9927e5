//! Invoice math: the fixed pricing policy applied to a cart.
//!
//! The figures are derived at read time and never stored. Rounding to two
//! decimals happens only when a figure is displayed, never inside the
//! computation, so intermediate results do not accumulate rounding error.

use serde::{Deserialize, Serialize};

use crate::model::cart::Cart;

/// Tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;
/// Flat delivery fee, charged even on an empty cart.
pub const DELIVERY_FEE: f64 = 112.0;
/// Discount rate applied to (subtotal + delivery).
pub const DISCOUNT_RATE: f64 = 0.03;

/// Monetary breakdown for the current cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery: f64,
    pub discount: f64,
    pub total: f64,
}

impl Invoice {
    /// Computes the breakdown from the cart under the fixed policy:
    /// tax is 8% of the subtotal, delivery is a flat 112.00, the 3%
    /// discount applies to subtotal plus delivery.
    pub fn compute(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal * TAX_RATE;
        let delivery = DELIVERY_FEE;
        let discount = (subtotal + delivery) * DISCOUNT_RATE;
        let total = subtotal + tax + delivery - discount;
        Invoice {
            subtotal,
            tax,
            delivery,
            discount,
            total,
        }
    }
}

/// Formats a monetary amount for display, rounded to two decimals.
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}
