//! HTTP access to the external product source.
//!
//! The source is a single unauthenticated JSON endpoint returning the
//! full, unfiltered catalog; name filtering happens client-side in
//! `common::pipeline`. Any transport or decode failure is collapsed into
//! `ShopError::DataSource` so the update logic can log it and keep the
//! previous result set.

use gloo_net::http::Request;

use common::error::ShopError;
use common::model::offer::ProductOffer;

/// Fixed local origin of the product source.
pub const PRODUCTS_URL: &str = "http://localhost:3001/products";

/// Fetches the full catalog from the product source.
pub async fn fetch_catalog() -> Result<Vec<ProductOffer>, ShopError> {
    let response = Request::get(PRODUCTS_URL)
        .send()
        .await
        .map_err(|err| ShopError::DataSource(err.to_string()))?;

    if response.status() != 200 {
        return Err(ShopError::DataSource(format!(
            "unexpected status {}",
            response.status()
        )));
    }

    response
        .json::<Vec<ProductOffer>>()
        .await
        .map_err(|err| ShopError::DataSource(err.to_string()))
}
