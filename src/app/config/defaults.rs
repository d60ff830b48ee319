// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Gallery bounds are re-exported from the domain newtypes so that the
//! config layer and the value objects share one source of truth.

pub use crate::domain::ui::newtypes::image_cache_bounds::{
    DEFAULT as DEFAULT_IMAGE_CACHE_SIZE, MAX as MAX_IMAGE_CACHE_SIZE,
    MIN as MIN_IMAGE_CACHE_SIZE,
};
pub use crate::domain::ui::newtypes::transition_bounds::{
    DEFAULT_MS as DEFAULT_TRANSITION_DELAY_MS, MAX_MS as MAX_TRANSITION_DELAY_MS,
    MIN_MS as MIN_TRANSITION_DELAY_MS,
};

// ==========================================================================
// Image Request Defaults
// ==========================================================================

/// Default width hint (pixels) sent with gallery image requests.
pub const DEFAULT_IMAGE_WIDTH_HINT: u32 = 800;

/// Smallest width hint accepted from the config file.
pub const MIN_IMAGE_WIDTH_HINT: u32 = 160;

/// Largest width hint accepted from the config file.
pub const MAX_IMAGE_WIDTH_HINT: u32 = 2048;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_TRANSITION_DELAY_MS >= DEFAULT_TRANSITION_DELAY_MS);
    assert!(DEFAULT_TRANSITION_DELAY_MS >= MIN_TRANSITION_DELAY_MS);

    assert!(MIN_IMAGE_CACHE_SIZE > 0);
    assert!(DEFAULT_IMAGE_CACHE_SIZE >= MIN_IMAGE_CACHE_SIZE);
    assert!(DEFAULT_IMAGE_CACHE_SIZE <= MAX_IMAGE_CACHE_SIZE);

    assert!(MIN_IMAGE_WIDTH_HINT > 0);
    assert!(DEFAULT_IMAGE_WIDTH_HINT >= MIN_IMAGE_WIDTH_HINT);
    assert!(DEFAULT_IMAGE_WIDTH_HINT <= MAX_IMAGE_WIDTH_HINT);
};
