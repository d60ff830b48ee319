// SPDX-License-Identifier: MPL-2.0
//! About screen: the café's story, highlights, a customer testimonial, the
//! application version and credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, rule, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Café highlights: glyph, figure and i18n key of the caption.
const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    ("☕", "+5,000", "about-stat-cups"),
    ("🏆", "+15", "about-stat-years"),
    ("👥", "+50", "about-stat-staff"),
    ("😊", "+10,000", "about-stat-customers"),
];

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BackToGallery,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let arrow = if ctx.i18n.is_rtl() { "→" } else { "←" };
    let back_button = button(
        text(format!("{arrow} {}", ctx.i18n.tr("about-back-to-gallery-button")))
            .size(typography::BODY),
    )
    .style(styles::button::primary)
    .on_press(Message::BackToGallery);

    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let align = if ctx.i18n.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    };

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(align)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(build_section(
            ctx.i18n.tr("about-story-title"),
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(ctx.i18n.tr("about-story-experience")).size(typography::BODY_LG))
                .push(Text::new(ctx.i18n.tr("about-story-visit")).size(typography::BODY_LG))
                .into(),
        ))
        .push(build_highlights(ctx.i18n))
        .push(build_section(
            ctx.i18n.tr("about-section-testimonial"),
            Column::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(format!("\"{}\"", ctx.i18n.tr("about-testimonial")))
                        .size(typography::BODY_LG),
                )
                .push(
                    Text::new(format!("- {}", ctx.i18n.tr("about-testimonial-author")))
                        .size(typography::BODY)
                        .color(palette::CORAL_500),
                )
                .into(),
        ))
        .push(build_section(
            ctx.i18n.tr("about-section-app"),
            Text::new(format!("v{APP_VERSION}"))
                .size(typography::BODY)
                .into(),
        ))
        .push(build_section(
            ctx.i18n.tr("about-section-credits"),
            Column::new()
                .spacing(spacing::XS)
                .push(build_credit_item(&ctx.i18n.tr("about-credits-iced")))
                .push(build_credit_item(&ctx.i18n.tr("about-credits-fluent")))
                .push(build_credit_item(&ctx.i18n.tr("about-credits-photos")))
                .into(),
        ));

    scrollable(content).into()
}

fn build_highlights(i18n: &I18n) -> Element<'_, Message> {
    let mut tiles: Vec<Element<'_, Message>> = HIGHLIGHTS
        .iter()
        .map(|&(glyph, figure, key)| {
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(glyph).size(sizing::ICON_LG))
                    .push(
                        Text::new(figure)
                            .size(typography::TITLE_LG)
                            .color(palette::CORAL_500),
                    )
                    .push(Text::new(i18n.tr(key)).size(typography::BODY)),
            )
            .width(Length::FillPortion(1))
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .style(styles::container::card)
            .into()
        })
        .collect();
    if i18n.is_rtl() {
        tiles.reverse();
    }

    Row::with_children(tiles)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn build_credit_item<'a>(description: &str) -> Element<'a, Message> {
    Text::new(format!("• {description}"))
        .size(typography::BODY)
        .into()
}

fn build_section(title: String, content: Element<'_, Message>) -> Element<'_, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
