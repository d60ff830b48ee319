// SPDX-License-Identifier: MPL-2.0
//! Café color schemes and the light/dark mode setting.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub error: Color,

    // Badge overlay on card images
    pub badge_background: Color,
    pub badge_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_50,
            surface_secondary: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::CORAL_500,
            brand_secondary: palette::CORAL_600,

            error: palette::ERROR_500,

            badge_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::WHITE
            },
            badge_text: palette::GRAY_900,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::CORAL_500,
            brand_secondary: palette::CORAL_300,

            error: palette::ERROR_500,

            badge_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            badge_text: palette::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Light unless the desktop reports dark; the café site is light
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }
}

/// Resolved theme: the mode plus the colors it maps to.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = if mode.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode }
    }

    /// Builds the iced theme with the coral brand as primary color.
    #[must_use]
    pub fn to_iced(&self) -> Theme {
        let (name, base) = if self.mode.is_dark() {
            ("Café Dark", Palette::DARK)
        } else {
            ("Café Light", Palette::LIGHT)
        };

        Theme::custom(
            name.to_string(),
            Palette {
                background: self.colors.surface_primary,
                text: self.colors.text_primary,
                primary: self.colors.brand_primary,
                danger: self.colors.error,
                ..base
            },
        )
    }
}
