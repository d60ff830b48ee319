// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    if theme.extended_palette().is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Gallery card surface: rounded, elevated, clipped so the image follows
/// the corners.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).surface_secondary)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Category badge drawn over the card image.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.badge_background)),
        text_color: Some(colors.badge_text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Stand-in for an image that is still loading or failed to load.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let base = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_100
    };
    container::Style {
        background: Some(Background::Color(base)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Scales every color of `style` by `alpha`, for fading a whole surface.
#[must_use]
pub fn faded(style: container::Style, alpha: f32) -> container::Style {
    container::Style {
        background: style.background.map(|background| background.scale_alpha(alpha)),
        text_color: style.text_color.map(|color| color.scale_alpha(alpha)),
        border: Border {
            color: style.border.color.scale_alpha(alpha),
            ..style.border
        },
        shadow: iced::Shadow {
            color: style.shadow.color.scale_alpha(alpha),
            ..style.shadow
        },
        ..style
    }
}

/// Top navigation bar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..base
        })),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dropdown panel under the navigation bar.
pub fn dropdown(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}
