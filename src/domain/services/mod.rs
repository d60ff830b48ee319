// SPDX-License-Identifier: MPL-2.0
//! Services the café offers, as shown on the services screen.

/// One service card. Defined at compile time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Emoji shown above the title.
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Remote image resource.
    pub image_url: &'static str,
}
