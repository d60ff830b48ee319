// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top of every screen; a dismissible warning banner
//! appears below it when the configuration could not be read.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::services::{self, ViewContext as ServicesViewContext};
use iced::{
    alignment::Vertical,
    widget::{button, container, mouse_area, Column, Container, Row, Space, Text},
    Background, Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: Option<&'a gallery::State>,
    pub services: Option<&'a services::State>,
    pub menu_open: bool,
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(ctx.gallery, ctx.i18n),
        Screen::Services => view_services(ctx.services, ctx.i18n),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    };
    // Clicking outside the open menu closes it.
    let current_view: Element<'_, Message> = if ctx.menu_open {
        mouse_area(current_view)
            .on_press(Message::Navbar(navbar::Message::CloseMenu))
            .into()
    } else {
        current_view
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view);
    if let Some(key) = ctx.warning {
        column = column.push(view_warning(ctx.i18n, key));
    }

    Container::new(
        column
            .push(
                Container::new(current_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_gallery<'a>(gallery: Option<&'a gallery::State>, i18n: &'a I18n) -> Element<'a, Message> {
    match gallery {
        Some(state) => state
            .view(GalleryViewContext { i18n })
            .map(Message::Gallery),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    }
}

fn view_services<'a>(
    services: Option<&'a services::State>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    match services {
        Some(state) => state
            .view(ServicesViewContext { i18n })
            .map(Message::Services),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    }
}

fn view_warning<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    let mut items: Vec<Element<'a, Message>> = vec![
        Text::new(i18n.tr(key)).size(typography::BODY).into(),
        Space::new().width(Length::Fill).into(),
        button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
            .on_press(Message::DismissWarning)
            .into(),
    ];
    if i18n.is_rtl() {
        items.reverse();
    }

    Container::new(
        Row::with_children(items)
            .spacing(spacing::SM)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::WARNING_100)),
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    })
    .into()
}
