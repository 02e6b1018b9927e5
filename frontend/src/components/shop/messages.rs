use common::error::ShopError;
use common::model::offer::ProductOffer;
use common::pipeline::{GroupKey, SortKey};

#[derive(Clone)]
pub enum Msg {
    UpdateSearchTerm(String),
    Search,
    CatalogLoaded {
        generation: u64,
        offers: Vec<ProductOffer>,
    },
    CatalogFailed {
        generation: u64,
        error: ShopError,
    },
    SetEcoOnly(bool),
    SetSortKey(SortKey),
    SetGroupKey(GroupKey),
    AddToCart(ProductOffer),
    RemoveFromCart(usize),
    OpenCart,
    CloseCart,
    ExportInvoice,
}
