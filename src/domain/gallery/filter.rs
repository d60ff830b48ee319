// SPDX-License-Identifier: MPL-2.0
//! Derivation of the visible subset of a catalog under a filter.
//!
//! Everything here is pure: no state, no I/O, and the catalog is only read.
//! Filtering is order-stable, so the result is always a subsequence of the
//! catalog rather than a re-sort.

use super::catalog::Catalog;
use super::types::{Filter, MediaItem};

/// Items of `catalog` that pass `filter`, in catalog order.
///
/// `Filter::All` yields the entire catalog. The result may be empty.
#[must_use]
pub fn visible_items(catalog: &Catalog, filter: Filter) -> Vec<&'static MediaItem> {
    catalog
        .items()
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

/// Number of items of `catalog` that pass `filter`.
#[must_use]
pub fn count_for(catalog: &Catalog, filter: Filter) -> usize {
    catalog
        .items()
        .iter()
        .filter(|item| filter.matches(item.category))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::types::{Category, CategoryFilter, MediaId};

    const fn item(id: u32, category: Category) -> MediaItem {
        MediaItem {
            id: MediaId(id),
            title: "",
            category,
            media_url: "",
            description: "",
        }
    }

    static SMALL_ITEMS: [MediaItem; 3] = [
        item(1, Category::Drinks),
        item(2, Category::Drinks),
        item(3, Category::Food),
    ];

    static NO_FILTERS: [CategoryFilter; 0] = [];

    fn small_catalog() -> Catalog {
        Catalog::new(&SMALL_ITEMS, &NO_FILTERS)
    }

    fn ids(items: &[&MediaItem]) -> Vec<u32> {
        items.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn single_category_selects_matching_items() {
        let visible = visible_items(&small_catalog(), Filter::Only(Category::Food));
        assert_eq!(ids(&visible), vec![3]);
    }

    #[test]
    fn all_returns_full_catalog_in_order() {
        let visible = visible_items(&small_catalog(), Filter::All);
        assert_eq!(ids(&visible), vec![1, 2, 3]);
    }

    #[test]
    fn category_without_items_yields_empty_subset() {
        let visible = visible_items(&small_catalog(), Filter::Only(Category::Events));
        assert!(visible.is_empty());
    }

    #[test]
    fn result_is_order_preserving_subsequence() {
        let catalog = small_catalog();
        let visible = visible_items(&catalog, Filter::Only(Category::Drinks));
        assert_eq!(ids(&visible), vec![1, 2]);

        let positions: Vec<usize> = visible
            .iter()
            .map(|v| {
                catalog
                    .items()
                    .iter()
                    .position(|item| item.id == v.id)
                    .expect("visible item must come from the catalog")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = small_catalog();
        let before: Vec<MediaItem> = catalog.items().to_vec();
        for filter in [Filter::All, Filter::Only(Category::Drinks)] {
            assert_eq!(visible_items(&catalog, filter), visible_items(&catalog, filter));
        }
        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn count_matches_visible_len() {
        let catalog = small_catalog();
        for filter in [
            Filter::All,
            Filter::Only(Category::Drinks),
            Filter::Only(Category::Events),
        ] {
            assert_eq!(count_for(&catalog, filter), visible_items(&catalog, filter).len());
        }
    }
}
