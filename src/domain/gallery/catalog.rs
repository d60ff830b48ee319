// SPDX-License-Identifier: MPL-2.0
//! Read-only view over a catalog of media items and its filter entries.

use super::types::{Category, CategoryFilter, Filter, MediaId, MediaItem};

/// An ordered, immutable pair of item and filter tables.
///
/// Both slices are `'static`: catalogs are compiled in and live for the
/// whole process. Copying a `Catalog` only copies two slice references.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    items: &'static [MediaItem],
    filters: &'static [CategoryFilter],
}

impl Catalog {
    #[must_use]
    pub const fn new(items: &'static [MediaItem], filters: &'static [CategoryFilter]) -> Self {
        Self { items, filters }
    }

    /// All items in catalog order.
    #[must_use]
    pub fn items(&self) -> &'static [MediaItem] {
        self.items
    }

    /// All filter entries in display order.
    #[must_use]
    pub fn filters(&self) -> &'static [CategoryFilter] {
        self.filters
    }

    #[must_use]
    pub fn find(&self, id: MediaId) -> Option<&'static MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Filter entry describing `category`, used to render an item's badge.
    #[must_use]
    pub fn filter_for(&self, category: Category) -> Option<&'static CategoryFilter> {
        self.filters
            .iter()
            .find(|entry| entry.id == Filter::Only(category))
    }

    /// Badge label for `category`.
    ///
    /// Returns `None` when the filter table has no entry for it; callers
    /// render no badge in that case instead of failing.
    #[must_use]
    pub fn category_label(&self, category: Category) -> Option<&'static str> {
        self.filter_for(category).map(|entry| entry.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ITEMS: [MediaItem; 2] = [
        MediaItem {
            id: MediaId(1),
            title: "Espresso",
            category: Category::Drinks,
            media_url: "https://example.com/1.jpg",
            description: "",
        },
        MediaItem {
            id: MediaId(2),
            title: "Hat",
            category: Category::Fashion,
            media_url: "https://example.com/2.jpg",
            description: "",
        },
    ];

    static FILTERS: [CategoryFilter; 2] = [
        CategoryFilter {
            id: Filter::All,
            label: "All",
            icon: None,
        },
        CategoryFilter {
            id: Filter::Only(Category::Drinks),
            label: "Drinks",
            icon: None,
        },
    ];

    #[test]
    fn find_returns_item_by_id() {
        let catalog = Catalog::new(&ITEMS, &FILTERS);
        assert_eq!(catalog.find(MediaId(2)).map(|item| item.title), Some("Hat"));
        assert!(catalog.find(MediaId(9)).is_none());
    }

    #[test]
    fn category_label_resolves_known_category() {
        let catalog = Catalog::new(&ITEMS, &FILTERS);
        assert_eq!(catalog.category_label(Category::Drinks), Some("Drinks"));
    }

    #[test]
    fn category_label_degrades_to_none_on_missing_entry() {
        let catalog = Catalog::new(&ITEMS, &FILTERS);
        assert_eq!(catalog.category_label(Category::Fashion), None);
    }
}
