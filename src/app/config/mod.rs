// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Filter transition timing, reselect policy and image loading
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GAMMA_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gamma_gallery::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the filter transition down
//! config.gallery.transition_delay_ms = Some(600);
//!
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{ImageCacheSize, TransitionDelay};
use crate::error::{Error, Result};
use crate::ui::gallery::{ReselectPolicy, Settings as GallerySettings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "he", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Time spent in the loading phase after a filter change (milliseconds).
    #[serde(
        default = "default_transition_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_delay_ms: Option<u64>,

    /// What happens when the already selected filter is pressed again.
    #[serde(default)]
    pub reselect: ReselectPolicy,

    /// Number of decoded images kept in memory.
    #[serde(
        default = "default_image_cache_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_size: Option<usize>,

    /// Width (pixels) requested from the image host.
    #[serde(
        default = "default_image_width_hint",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_width_hint: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: default_transition_delay_ms(),
            reselect: ReselectPolicy::default(),
            image_cache_size: default_image_cache_size(),
            image_width_hint: default_image_width_hint(),
        }
    }
}

impl GalleryConfig {
    /// Converts the raw section into validated gallery settings.
    ///
    /// Out-of-range values are clamped rather than rejected.
    #[must_use]
    pub fn to_settings(&self) -> GallerySettings {
        GallerySettings {
            transition_delay: self
                .transition_delay_ms
                .map(TransitionDelay::new)
                .unwrap_or_default(),
            reselect: self.reselect,
            image_cache_size: self
                .image_cache_size
                .map(ImageCacheSize::new)
                .unwrap_or_default(),
            image_width_hint: self
                .image_width_hint
                .unwrap_or(DEFAULT_IMAGE_WIDTH_HINT)
                .clamp(MIN_IMAGE_WIDTH_HINT, MAX_IMAGE_WIDTH_HINT),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_transition_delay_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_DELAY_MS)
}

fn default_image_cache_size() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_SIZE)
}

fn default_image_width_hint() -> Option<u32> {
    Some(DEFAULT_IMAGE_WIDTH_HINT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to `base_dir`, or to the resolved config
/// directory when `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
