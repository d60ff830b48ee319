// SPDX-License-Identifier: MPL-2.0
//! Gallery value types: categories, filter ids, media items and filter entries.

use crate::domain::error::UnknownCategory;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Category
// =============================================================================

/// Closed set of concrete categories an item can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Drinks,
    Food,
    Events,
    Fashion,
}

impl Category {
    /// Every concrete category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Drinks,
        Category::Food,
        Category::Events,
        Category::Fashion,
    ];

    /// Stable string identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Category::Drinks => "drinks",
            Category::Food => "food",
            Category::Events => "events",
            Category::Fashion => "fashion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Identifier of a category filter.
///
/// `All` is the reserved "no filter" id; it is distinct from every concrete
/// category and matches the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// String id of the reserved "no filter" value.
    pub const ALL_ID: &'static str = "all";

    /// Returns `true` if an item tagged `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Filter::All => Self::ALL_ID,
            Filter::Only(category) => category.id(),
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Filter::Only(category)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Filter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_ID {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

// =============================================================================
// Media Item
// =============================================================================

/// Unique item identifier. Ids follow catalog insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(pub u32);

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single gallery entry. Defined at compile time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    pub title: &'static str,
    pub category: Category,
    /// Remote image resource.
    pub media_url: &'static str,
    pub description: &'static str,
}

// =============================================================================
// Category Filter Entry
// =============================================================================

/// Display glyph shown next to a filter label. Carries no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Coffee,
    Utensils,
    Calendar,
    Shirt,
}

impl Glyph {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Coffee => "☕",
            Glyph::Utensils => "🍴",
            Glyph::Calendar => "📅",
            Glyph::Shirt => "👕",
        }
    }
}

/// One selectable entry of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub id: Filter,
    pub label: &'static str,
    pub icon: Option<Glyph>,
}
