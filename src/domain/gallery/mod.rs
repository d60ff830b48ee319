// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Pure types and derivations for the filterable gallery, independent of
//! any presentation framework.

pub mod catalog;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use filter::{count_for, visible_items};
pub use types::{Category, CategoryFilter, Filter, Glyph, MediaId, MediaItem};
