// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery: heading, filter bar and card grid.
//!
//! Everything here is a pure function of [`GridContext`]; the component
//! owns the state and passes a snapshot in for each frame.

use super::component::Message;
use super::sequencer::Phase;
use crate::domain::gallery::{count_for, Catalog, Filter, MediaId, MediaItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::remote_image::ImageState;
use crate::ui::styles;
use crate::ui::styles::container::faded;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, mouse_area, responsive, Column, Container, Row, Space, Stack, Text,
};
use iced::{Background, Color, ContentFit, Element, Length, Padding, Size, Theme};
use lru::LruCache;
use std::time::Duration;

/// Duration of the fade and slide once a subset settles.
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);

/// Viewport widths (px) at which the grid gains a column.
const COLUMN_BREAKPOINTS: [f32; 3] = [640.0, 1024.0, 1280.0];

/// Number of card columns for a content area `width` pixels wide.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    1 + COLUMN_BREAKPOINTS
        .iter()
        .filter(|breakpoint| width >= **breakpoint)
        .count()
}

/// Eased reveal progress in `0.0..=1.0`, `elapsed` after a subset settled.
#[must_use]
pub fn reveal_progress(elapsed: Duration) -> f32 {
    let t = (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
    // ease-out cubic
    1.0 - (1.0 - t).powi(3)
}

/// Snapshot of the gallery state needed to draw one frame.
pub struct GridContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: Catalog,
    pub selected: Filter,
    pub phase: &'a Phase,
    pub hovered: Option<MediaId>,
    pub images: &'a LruCache<MediaId, ImageState>,
    pub reveal: f32,
    pub spinner_rotation: f32,
    pub rtl: bool,
}

impl GridContext<'_> {
    /// Start edge of the reading direction.
    fn text_alignment(&self) -> Horizontal {
        if self.rtl {
            Horizontal::Right
        } else {
            Horizontal::Left
        }
    }
}

/// Heading and subtitle of the gallery page.
pub fn header<'a>(ctx: &GridContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-title"))
        .size(typography::DISPLAY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });
    let subtitle = Text::new(ctx.i18n.tr("gallery-subtitle"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(
            Container::new(subtitle)
                .max_width(sizing::CONTENT_MAX_WIDTH * 0.6)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .into()
}

/// One pill per filter entry, in catalog order, with the item count.
pub fn filter_bar<'a>(ctx: &GridContext<'a>) -> Element<'a, Message> {
    let mut pills: Vec<Element<'a, Message>> = ctx
        .catalog
        .filters()
        .iter()
        .map(|entry| {
            let count = count_for(&ctx.catalog, entry.id);
            let label = match entry.icon {
                Some(glyph) => format!("{} {} ({count})", glyph.symbol(), entry.label),
                None => format!("{} ({count})", entry.label),
            };

            button(Text::new(label).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::filter_pill(entry.id == ctx.selected))
                .on_press(Message::SelectCategory(entry.id))
                .into()
        })
        .collect();

    if ctx.rtl {
        pills.reverse();
    }

    Container::new(
        Row::with_children(pills)
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .wrap(),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

/// Spinner, empty notice, or the card grid, depending on the phase.
pub fn content<'a>(ctx: GridContext<'a>) -> Element<'a, Message> {
    let phase: &'a Phase = ctx.phase;
    match phase {
        Phase::Loading => loading(&ctx),
        Phase::Settled(items) if items.is_empty() => empty(&ctx),
        Phase::Settled(items) => {
            let items: &'a [&'static MediaItem] = items.as_slice();
            responsive(move |size: Size| cards(&ctx, items, size.width)).into()
        }
    }
}

fn loading<'a>(ctx: &GridContext<'a>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::CORAL_500, ctx.spinner_rotation)
        .size(sizing::ICON_LG * 2.0)
        .into_element();

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn empty<'a>(ctx: &GridContext<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(ctx.i18n.tr("gallery-empty"))
            .size(typography::TITLE_SM)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(Horizontal::Center)
    .into()
}

fn cards<'a>(
    ctx: &GridContext<'a>,
    items: &'a [&'static MediaItem],
    width: f32,
) -> Element<'a, Message> {
    let columns = columns_for_width(width);
    let slide = sizing::REVEAL_SLIDE * (1.0 - ctx.reveal);

    let rows = items.chunks(columns).map(|chunk| {
        let mut cells: Vec<Element<'a, Message>> =
            chunk.iter().map(|&item| card(ctx, item)).collect();
        // Keep card widths equal on a partial last row
        for _ in chunk.len()..columns {
            cells.push(Space::new().width(Length::FillPortion(1)).into());
        }
        if ctx.rtl {
            cells.reverse();
        }
        Element::from(
            Row::with_children(cells)
                .spacing(spacing::LG)
                .width(Length::Fill),
        )
    });

    Container::new(
        Column::with_children(rows)
            .spacing(spacing::LG)
            .width(Length::Fill),
    )
    .padding(Padding {
        top: slide,
        bottom: sizing::REVEAL_SLIDE - slide,
        ..Padding::ZERO
    })
    .width(Length::Fill)
    .into()
}

/// A card, faded as a whole by the reveal progress.
fn card<'a>(ctx: &GridContext<'a>, item: &'static MediaItem) -> Element<'a, Message> {
    let reveal = ctx.reveal;
    let picture: Element<'a, Message> = match ctx.images.peek(&item.id) {
        Some(ImageState::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .opacity(reveal)
            .into(),
        Some(ImageState::Failed) => {
            placeholder(Some(ctx.i18n.tr("gallery-image-unavailable")), reveal)
        }
        None => placeholder(None, reveal),
    };

    let mut layers = Stack::new().push(picture);

    if let Some(label) = ctx.catalog.category_label(item.category) {
        let badge = Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(move |theme: &Theme| faded(styles::container::badge(theme), reveal));
        layers = layers.push(
            Container::new(badge)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(ctx.text_alignment()),
        );
    }

    if ctx.hovered == Some(item.id) {
        layers = layers.push(details(ctx, item));
    }

    let body = Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .clip(true)
        .style(move |theme: &Theme| faded(styles::container::card(theme), reveal));

    mouse_area(body)
        .on_enter(Message::CardEntered(item.id))
        .on_exit(Message::CardExited(item.id))
        .into()
}

/// Title and description over a dark gradient band at the card bottom.
fn details<'a>(ctx: &GridContext<'a>, item: &'static MediaItem) -> Element<'a, Message> {
    let align = ctx.text_alignment();
    let reveal = ctx.reveal;
    let text_block = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(align)
        .push(
            Text::new(item.title)
                .size(typography::TITLE_MD)
                .color(Color {
                    a: reveal,
                    ..palette::WHITE
                }),
        )
        .push(
            Text::new(item.description)
                .size(typography::BODY)
                .color(Color {
                    a: reveal,
                    ..palette::GRAY_100
                }),
        );

    let band = Container::new(text_block)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: crate::ui::design_tokens::opacity::OVERLAY_STRONG * reveal,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    Container::new(band)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

fn placeholder<'a>(caption: Option<String>, reveal: f32) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match caption {
        Some(caption) => Text::new(caption).size(typography::CAPTION).into(),
        None => Space::new().into(),
    };
    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |theme: &Theme| faded(styles::container::image_placeholder(theme), reveal))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(320.0), 1);
        assert_eq!(columns_for_width(639.9), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1279.0), 3);
        assert_eq!(columns_for_width(1280.0), 4);
        assert_eq!(columns_for_width(2560.0), 4);
    }

    #[test]
    fn reveal_starts_hidden_and_ends_visible() {
        assert_eq!(reveal_progress(Duration::ZERO), 0.0);
        assert_eq!(reveal_progress(REVEAL_DURATION), 1.0);
        assert_eq!(reveal_progress(Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn reveal_is_monotonic_and_eases_out() {
        let mut previous = 0.0;
        for ms in (0..=500).step_by(25) {
            let progress = reveal_progress(Duration::from_millis(ms));
            assert!(progress >= previous);
            previous = progress;
        }
        // Ease-out: more than half done at the midpoint
        assert!(reveal_progress(Duration::from_millis(250)) > 0.5);
    }
}
