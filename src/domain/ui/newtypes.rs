// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::num::NonZeroUsize;
use std::time::Duration;

// =============================================================================
// Transition Delay Bounds
// =============================================================================

/// Filter transition delay bounds (0 to 5000 milliseconds).
pub mod transition_bounds {
    /// Minimum delay in milliseconds (settle on the next update).
    pub const MIN_MS: u64 = 0;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default delay in milliseconds.
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// TransitionDelay
// =============================================================================

/// Time the gallery spends in the loading phase after a filter change.
///
/// Always within 0–5000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelay(u64);

impl TransitionDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDelay {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Image Cache Bounds
// =============================================================================

/// Bounds for the number of decoded images kept in memory.
pub mod image_cache_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 256;
    pub const DEFAULT: usize = 32;
}

// =============================================================================
// ImageCacheSize
// =============================================================================

/// Capacity of the gallery image cache, always within 1–256 entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCacheSize(NonZeroUsize);

impl ImageCacheSize {
    /// Creates a new cache size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        let clamped = value.clamp(image_cache_bounds::MIN, image_cache_bounds::MAX);
        Self(NonZeroUsize::new(clamped).unwrap_or(NonZeroUsize::MIN))
    }

    #[must_use]
    pub fn value(self) -> NonZeroUsize {
        self.0
    }
}

impl Default for ImageCacheSize {
    fn default() -> Self {
        Self::new(image_cache_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
