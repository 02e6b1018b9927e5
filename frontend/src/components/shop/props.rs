//! Properties for the `ShopComponent`.

use common::pipeline::GroupKey;
use yew::prelude::*;

/// Configuration passed from a parent component.
///
/// The shop ships two grouping variants of the results view (by product
/// name and by vendor), unified behind one pipeline. This prop picks the
/// variant the component starts in; the user can still switch at runtime
/// via the grouping selector.
#[derive(Properties, PartialEq, Clone)]
pub struct ShopProps {
    #[prop_or_default]
    pub initial_group_key: GroupKey,
}
