//! Search result view pipeline: filter, sort, group.
//!
//! The pipeline is a pure function of the fetched catalog slice and the
//! view options. The frontend recomputes it synchronously after every
//! change to the results, the eco filter, or the sort key; there is no
//! hidden state between calls.
//!
//! Step order is fixed: eco filter first, then a stable sort by the
//! selected numeric field, then partitioning into groups that preserve
//! first-seen key order and the sorted within-group order.

use serde::{Deserialize, Serialize};

use crate::error::ShopError;
use crate::model::offer::ProductOffer;

/// Sort orders offered by the sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    /// Parses the `<select>` value; unknown values fall back to the
    /// default ascending price order.
    pub fn from_str(s: &str) -> Self {
        match s {
            "priceAsc" => Self::PriceAsc,
            "priceDesc" => Self::PriceDesc,
            "ratingAsc" => Self::RatingAsc,
            "ratingDesc" => Self::RatingDesc,
            _ => Self::PriceAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "priceAsc",
            Self::PriceDesc => "priceDesc",
            Self::RatingAsc => "ratingAsc",
            Self::RatingDesc => "ratingDesc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingAsc => "Rating: Low to High",
            Self::RatingDesc => "Rating: High to Low",
        }
    }

    pub const ALL: [SortKey; 4] = [
        Self::PriceAsc,
        Self::PriceDesc,
        Self::RatingAsc,
        Self::RatingDesc,
    ];
}

/// Which field keys the result groups.
///
/// The original UI shipped the same transformation twice, once keyed by
/// product name and once by vendor; here both variants share one
/// pipeline and the key is a parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    #[default]
    ProductName,
    Vendor,
}

impl GroupKey {
    pub fn from_str(s: &str) -> Self {
        match s {
            "vendor" => Self::Vendor,
            _ => Self::ProductName,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductName => "product",
            Self::Vendor => "vendor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ProductName => "Product",
            Self::Vendor => "Vendor",
        }
    }

    fn of(&self, offer: &ProductOffer) -> String {
        match self {
            Self::ProductName => offer.name.clone(),
            Self::Vendor => offer.vendor.clone(),
        }
    }
}

/// Options driving [`apply_view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub eco_only: bool,
    pub sort_key: SortKey,
    pub group_key: GroupKey,
}

/// One rendered group: a key and the offers under it, in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    pub key: String,
    pub offers: Vec<ProductOffer>,
}

/// The filtered, sorted, grouped structure the results table renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedView {
    pub groups: Vec<ProductGroup>,
}

impl GroupedView {
    /// An empty view renders as an explicit "no results" message.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Trims the search term and rejects an empty one.
pub fn validate_search_term(term: &str) -> Result<String, ShopError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(ShopError::Validation(
            "Please enter a product name.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Filters the full catalog to offers whose name equals `term`,
/// case-insensitively. Exact match, not substring; catalog order is kept.
pub fn filter_catalog(catalog: &[ProductOffer], term: &str) -> Vec<ProductOffer> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|offer| offer.name.to_lowercase() == needle)
        .cloned()
        .collect()
}

/// Runs the fixed filter -> sort -> group pipeline over `offers`.
pub fn apply_view(offers: &[ProductOffer], options: &ViewOptions) -> GroupedView {
    let mut remaining: Vec<ProductOffer> = if options.eco_only {
        offers.iter().filter(|o| o.eco_friendly).cloned().collect()
    } else {
        offers.to_vec()
    };

    // `sort_by` is stable, so equal keys keep their input order.
    remaining.sort_by(|a, b| match options.sort_key {
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::RatingAsc => a.rating.total_cmp(&b.rating),
        SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
    });

    let mut groups: Vec<ProductGroup> = Vec::new();
    for offer in remaining {
        let key = options.group_key.of(&offer);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.offers.push(offer),
            None => groups.push(ProductGroup {
                key,
                offers: vec![offer],
            }),
        }
    }

    GroupedView { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(name: &str, vendor: &str, price: f64, rating: f64, eco: bool) -> ProductOffer {
        ProductOffer {
            id: format!("{name}-{vendor}"),
            name: name.to_string(),
            vendor: vendor.to_string(),
            price,
            location: "Springfield".to_string(),
            eco_friendly: eco,
            rating,
            image_url: None,
        }
    }

    fn widget_catalog() -> Vec<ProductOffer> {
        vec![
            offer("Widget", "A", 10.0, 4.0, true),
            offer("Widget", "B", 8.0, 3.0, false),
        ]
    }

    #[test]
    fn empty_term_is_a_validation_error() {
        assert!(matches!(
            validate_search_term("   "),
            Err(ShopError::Validation(_))
        ));
        assert_eq!(validate_search_term("  Widget ").unwrap(), "Widget");
    }

    #[test]
    fn filter_is_exact_match_case_insensitive() {
        let catalog = vec![
            offer("Widget", "A", 10.0, 4.0, true),
            offer("Widget Pro", "A", 15.0, 4.0, true),
            offer("widget", "B", 8.0, 3.0, false),
        ];
        let hits = filter_catalog(&catalog, "WIDGET");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|o| o.name.to_lowercase() == "widget"));
    }

    #[test]
    fn widget_search_sorts_ascending_into_one_group() {
        let view = apply_view(
            &widget_catalog(),
            &ViewOptions {
                eco_only: false,
                sort_key: SortKey::PriceAsc,
                group_key: GroupKey::ProductName,
            },
        );
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].key, "Widget");
        let vendors: Vec<&str> = view.groups[0]
            .offers
            .iter()
            .map(|o| o.vendor.as_str())
            .collect();
        assert_eq!(vendors, ["B", "A"]);
    }

    #[test]
    fn price_desc_exactly_reverses_price_asc_for_distinct_prices() {
        let offers = vec![
            offer("Widget", "A", 10.0, 4.0, true),
            offer("Widget", "B", 8.0, 3.0, true),
            offer("Widget", "C", 12.0, 5.0, true),
        ];
        let mut opts = ViewOptions::default();
        opts.sort_key = SortKey::PriceAsc;
        let asc: Vec<String> = apply_view(&offers, &opts).groups[0]
            .offers
            .iter()
            .map(|o| o.vendor.clone())
            .collect();
        opts.sort_key = SortKey::PriceDesc;
        let desc: Vec<String> = apply_view(&offers, &opts).groups[0]
            .offers
            .iter()
            .map(|o| o.vendor.clone())
            .collect();
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let offers = vec![
            offer("Widget", "First", 9.0, 1.0, true),
            offer("Widget", "Second", 9.0, 2.0, true),
            offer("Widget", "Third", 9.0, 3.0, true),
        ];
        let view = apply_view(
            &offers,
            &ViewOptions {
                sort_key: SortKey::PriceAsc,
                ..ViewOptions::default()
            },
        );
        let vendors: Vec<&str> = view.groups[0]
            .offers
            .iter()
            .map(|o| o.vendor.as_str())
            .collect();
        assert_eq!(vendors, ["First", "Second", "Third"]);
    }

    #[test]
    fn eco_filter_is_a_strict_subset_with_no_non_eco_offers() {
        let offers = widget_catalog();
        let view = apply_view(
            &offers,
            &ViewOptions {
                eco_only: true,
                ..ViewOptions::default()
            },
        );
        let kept: usize = view.groups.iter().map(|g| g.offers.len()).sum();
        assert!(kept < offers.len());
        assert!(view
            .groups
            .iter()
            .flat_map(|g| &g.offers)
            .all(|o| o.eco_friendly));
    }

    #[test]
    fn grouping_partitions_the_filtered_set() {
        let offers = vec![
            offer("Widget", "A", 10.0, 4.0, true),
            offer("Gadget", "B", 8.0, 3.0, true),
            offer("Widget", "C", 12.0, 5.0, true),
            offer("Doohickey", "A", 3.0, 2.0, true),
        ];
        let view = apply_view(
            &offers,
            &ViewOptions {
                sort_key: SortKey::PriceAsc,
                ..ViewOptions::default()
            },
        );
        let total: usize = view.groups.iter().map(|g| g.offers.len()).sum();
        assert_eq!(total, offers.len());
        for offer in &offers {
            let homes = view
                .groups
                .iter()
                .filter(|g| g.offers.iter().any(|o| o.id == offer.id))
                .count();
            assert_eq!(homes, 1, "offer {} must live in exactly one group", offer.id);
        }
        // First-seen order after the price sort: Doohickey(3), Gadget(8), Widget(10).
        let keys: Vec<&str> = view.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["Doohickey", "Gadget", "Widget"]);
    }

    #[test]
    fn vendor_grouping_uses_the_vendor_key() {
        let offers = vec![
            offer("Widget", "A", 10.0, 4.0, true),
            offer("Gadget", "A", 8.0, 3.0, true),
            offer("Widget", "B", 12.0, 5.0, true),
        ];
        let view = apply_view(
            &offers,
            &ViewOptions {
                sort_key: SortKey::PriceAsc,
                group_key: GroupKey::Vendor,
                ..ViewOptions::default()
            },
        );
        let keys: Vec<&str> = view.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(view.groups[0].offers.len(), 2);
    }

    #[test]
    fn empty_filtered_set_yields_an_empty_view_not_an_error() {
        let view = apply_view(
            &[],
            &ViewOptions::default(),
        );
        assert!(view.is_empty());
    }

    #[test]
    fn sort_key_select_round_trips() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
        assert_eq!(SortKey::from_str("bogus"), SortKey::PriceAsc);
    }
}
