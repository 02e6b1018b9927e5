use thiserror::Error;

/// Error kinds surfaced by the shop logic.
///
/// Both variants are recoverable by a subsequent user action: a
/// `Validation` error asks the user to fix their input, a `DataSource`
/// error asks them to retry the search. Neither one touches existing
/// state (results, cart) when raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShopError {
    /// Invalid user input (empty search term, bad quantity).
    #[error("{0}")]
    Validation(String),
    /// The product source could not be reached or returned garbage.
    #[error("product source error: {0}")]
    DataSource(String),
}
