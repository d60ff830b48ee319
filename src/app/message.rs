// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::services;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Services(services::Message),
    Navbar(navbar::Message),
    About(about::Message),
    /// Hide the startup warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `he`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GAMMA_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional transition delay override in milliseconds.
    /// Takes precedence over `gallery.transition_delay_ms`.
    pub delay_ms: Option<u64>,
}
