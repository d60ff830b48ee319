// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the café name and a menu for switching screens and
//! the interface language.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

const MENU_GLYPH: &str = "☰";
const CLOSE_GLYPH: &str = "✕";

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenGallery,
    OpenServices,
    OpenAbout,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenGallery,
    OpenServices,
    OpenAbout,
    SelectLanguage(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenGallery => {
            *menu_open = false;
            Event::OpenGallery
        }
        Message::OpenServices => {
            *menu_open = false;
            Event::OpenServices
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::SelectLanguage(locale)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (glyph, tooltip_key) = if ctx.menu_open {
        (CLOSE_GLYPH, "navbar-menu-close")
    } else {
        (MENU_GLYPH, "navbar-menu-open")
    };

    let menu_button = button(Text::new(glyph).size(typography::TITLE_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(menu_item_style);
    let menu_button = iced::widget::tooltip(
        menu_button,
        Text::new(ctx.i18n.tr(tooltip_key)).size(typography::CAPTION),
        iced::widget::tooltip::Position::Bottom,
    );

    let name = Text::new(ctx.i18n.tr("cafe-name")).size(typography::TITLE_MD);

    let mut items: Vec<Element<'a, Message>> = vec![
        name.into(),
        Space::new().width(Length::Fill).into(),
        menu_button.into(),
    ];
    if ctx.i18n.is_rtl() {
        items.reverse();
    }

    Container::new(
        Row::with_children(items)
            .spacing(spacing::SM)
            .padding([spacing::SM, spacing::LG])
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .style(styles::container::toolbar)
    .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(220.0))
        .push(build_menu_item(ctx.i18n.tr("menu-gallery"), Message::OpenGallery))
        .push(build_menu_item(ctx.i18n.tr("menu-services"), Message::OpenServices))
        .push(build_menu_item(ctx.i18n.tr("menu-about"), Message::OpenAbout))
        .push(rule::horizontal(1))
        .push(
            Container::new(Text::new(ctx.i18n.tr("menu-language")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM]),
        );

    for locale in &ctx.i18n.available_locales {
        let name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if locale == ctx.i18n.current_locale() {
            format!("✓ {name}")
        } else {
            name
        };
        menu_column = menu_column.push(build_menu_item(
            label,
            Message::SelectLanguage(locale.clone()),
        ));
    }

    let align = if ctx.i18n.is_rtl() {
        Horizontal::Left
    } else {
        Horizontal::Right
    };

    Container::new(
        Container::new(menu_column)
            .padding(spacing::XS)
            .style(styles::container::dropdown),
    )
    .width(Length::Fill)
    .padding([0.0, spacing::LG])
    .align_x(align)
    .into()
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            menu_open: false,
        });
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            menu_open: true,
        });
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        assert_eq!(update(Message::CloseMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;
        let event = update(Message::OpenAbout, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::OpenAbout);

        menu_open = true;
        let event = update(Message::OpenGallery, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::OpenGallery);

        menu_open = true;
        let event = update(Message::OpenServices, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::OpenServices);
    }

    #[test]
    fn language_choice_is_forwarded() {
        let mut menu_open = true;
        let locale: LanguageIdentifier = "en-US".parse().expect("valid locale");
        let event = update(Message::SelectLanguage(locale.clone()), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::SelectLanguage(locale));
    }

    #[test]
    fn every_locale_has_a_display_name() {
        let i18n = I18n::default();
        for locale in &i18n.available_locales {
            let name = i18n.tr(&format!("language-name-{locale}"));
            assert!(!name.starts_with("MISSING"), "{locale}");
        }
    }
}
