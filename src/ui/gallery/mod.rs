// SPDX-License-Identifier: MPL-2.0
//! Filterable gallery screen.
//!
//! The screen owns the selected [`Filter`](crate::domain::gallery::Filter),
//! a [`sequencer::Sequencer`] that inserts a short loading phase between a
//! selection and the display of its subset, and a cache of remote images.
//!
//! Selecting a filter never swaps the grid content directly: it enters the
//! loading phase, and only once the configured delay elapses is the subset
//! recomputed from the filter selected at that moment.

mod component;
pub mod grid;
pub mod sequencer;

pub use component::{Message, State, ViewContext};
pub use crate::ui::remote_image::ImageState;

use crate::domain::ui::{ImageCacheSize, TransitionDelay};
use serde::{Deserialize, Serialize};

/// Behaviour when the already selected filter is pressed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReselectPolicy {
    /// Run the loading transition again.
    #[default]
    Replay,
    /// Do nothing while the selection is already settled.
    Ignore,
}

/// Validated gallery settings, built from `[gallery]` in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub transition_delay: TransitionDelay,
    pub reselect: ReselectPolicy,
    pub image_cache_size: ImageCacheSize,
    pub image_width_hint: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_delay: TransitionDelay::default(),
            reselect: ReselectPolicy::default(),
            image_cache_size: ImageCacheSize::default(),
            image_width_hint: crate::app::config::DEFAULT_IMAGE_WIDTH_HINT,
        }
    }
}
