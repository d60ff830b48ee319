// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (coral).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::CORAL_600)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::CORAL_500)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Pill shaped filter button. The selected pill is filled with the brand
/// color; the others follow the theme surface and pick up the brand color
/// on hover.
pub fn filter_pill(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let pill = Border {
            radius: radius::FULL.into(),
            ..Default::default()
        };

        if selected {
            return button::Style {
                background: Some(Background::Color(palette::CORAL_500)),
                text_color: WHITE,
                border: pill,
                shadow: shadow::MD,
                snap: true,
            };
        }

        let extended = theme.extended_palette();
        let (background, text_color) = if extended.is_dark {
            (palette::GRAY_700, WHITE)
        } else {
            (WHITE, palette::GRAY_700)
        };

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(background)),
                text_color: palette::CORAL_500,
                border: pill,
                shadow: shadow::MD,
                snap: true,
            },
            _ => button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: pill,
                shadow: shadow::SM,
                snap: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::CORAL_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn selected_pill_is_coral_in_every_state() {
        let style_fn = filter_pill(true);
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
        ] {
            let style = style_fn(&Theme::Light, status);
            assert_eq!(style.background, Some(Background::Color(palette::CORAL_500)));
            assert_eq!(style.text_color, WHITE);
        }
    }

    #[test]
    fn unselected_pill_highlights_text_on_hover() {
        let style_fn = filter_pill(false);
        let normal = style_fn(&Theme::Light, button::Status::Active);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);

        assert_ne!(normal.text_color, palette::CORAL_500);
        assert_eq!(hover.text_color, palette::CORAL_500);
    }

    #[test]
    fn unselected_pill_follows_theme() {
        let style_fn = filter_pill(false);
        let light = style_fn(&Theme::Light, button::Status::Active);
        let dark = style_fn(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }
}
