// SPDX-License-Identifier: MPL-2.0
//! Saving user preferences to `settings.toml`.

use super::config::{self, Config};
use crate::i18n::fluent::I18n;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Switches the interface to `locale` and records it in the configuration.
///
/// Unknown locales leave both the interface and the file untouched. A failed
/// write is logged; the new language stays active for this session.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    config_dir: Option<PathBuf>,
    locale: LanguageIdentifier,
) {
    i18n.set_locale(locale.clone());
    if i18n.current_locale() != &locale {
        log::warn!("No translation for locale {locale}");
        return;
    }

    config.general.language = Some(locale.to_string());
    if let Err(error) = config::save_with_override(config, config_dir) {
        log::warn!("Failed to save config: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn locale(id: &str) -> LanguageIdentifier {
        id.parse().expect("valid locale")
    }

    #[test]
    fn language_change_is_applied_and_saved() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut i18n = I18n::new(Some("he".to_string()), &Config::default());
        let mut config = Config::default();

        apply_language_change(
            &mut i18n,
            &mut config,
            Some(dir.path().to_path_buf()),
            locale("en-US"),
        );

        assert_eq!(i18n.current_locale(), &locale("en-US"));
        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn unknown_language_is_not_saved() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut i18n = I18n::new(Some("he".to_string()), &Config::default());
        let mut config = Config::default();

        apply_language_change(
            &mut i18n,
            &mut config,
            Some(dir.path().to_path_buf()),
            locale("fr"),
        );

        assert_eq!(i18n.current_locale(), &locale("he"));
        assert!(config.general.language.is_none());
        assert!(!dir.path().join("settings.toml").exists());
    }

    #[test]
    fn failed_save_keeps_new_language() {
        let dir = tempdir().expect("failed to create temp dir");
        // A directory where the file should be makes the write fail
        std::fs::create_dir_all(dir.path().join("settings.toml")).expect("create conflict");
        let mut i18n = I18n::new(Some("he".to_string()), &Config::default());
        let mut config = Config::default();

        apply_language_change(
            &mut i18n,
            &mut config,
            Some(dir.path().to_path_buf()),
            locale("en-US"),
        );

        assert_eq!(i18n.current_locale(), &locale("en-US"));
    }
}
