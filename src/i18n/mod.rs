// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Interface strings are localized with Fluent; `.ftl` files are embedded
//! at compile time from `assets/i18n/`. Catalog content (item titles,
//! descriptions and category labels) is authored data and is not localized.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Right-to-left detection for layout mirroring
//! - Fallback to Hebrew when no preferred locale is available

pub mod fluent;
