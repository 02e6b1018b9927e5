use serde::{Deserialize, Serialize};

/// One vendor's listing of a product, as returned by the product source.
///
/// The wire format is a JSON array of these records from
/// `GET /products`; field names follow the endpoint's camelCase
/// (`ecoFriendly`, `imageURL`). Offers are immutable once fetched; the
/// view pipeline only ever clones and reorders them, and the cart keeps
/// its own snapshot per line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOffer {
    pub id: String,
    pub name: String,
    pub vendor: String,
    /// Unit price in the shop currency. Non-negative.
    pub price: f64,
    pub location: String,
    #[serde(rename = "ecoFriendly")]
    pub eco_friendly: bool,
    /// Vendor rating on a 0–5 scale.
    pub rating: f64,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
