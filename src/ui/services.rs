// SPDX-License-Identifier: MPL-2.0
//! Services screen: one card per service the café offers.
//!
//! Card images are fetched when the screen mounts; dropping the state
//! aborts whatever is still in flight.

use crate::domain::services::Service;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::grid::columns_for_width;
use crate::ui::remote_image::{self, ImageRequest, ImageState};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::task;
use iced::widget::image::Handle;
use iced::widget::{
    button, image, responsive, scrollable, Column, Container, Row, Space, Text,
};
use iced::{ContentFit, Element, Length, Size, Task, Theme};
use std::collections::HashMap;

/// Height of the picture at the bottom of a service card.
const SERVICE_IMAGE_HEIGHT: f32 = 160.0;

/// Contextual data needed to render the services screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Image of the service at this index finished downloading.
    ImageLoaded(usize, Result<Handle, Error>),
    OpenGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenGallery,
}

pub struct State {
    services: &'static [Service],
    images: HashMap<usize, ImageState>,
    fetching: HashMap<usize, task::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("services", &self.services.len())
            .field("images", &self.images.len())
            .field("fetching", &self.fetching.len())
            .finish()
    }
}

impl State {
    /// Mounts the screen and starts fetching every service image.
    pub fn new(services: &'static [Service], width_hint: u32) -> (Self, Task<Message>) {
        let client = reqwest::Client::new();
        let mut fetching = HashMap::new();
        let mut tasks = Vec::with_capacity(services.len());

        for (index, service) in services.iter().enumerate() {
            let request = ImageRequest::new(service.image_url, width_hint);
            let (fetch, handle) = Task::perform(
                remote_image::fetch(client.clone(), request),
                move |result| Message::ImageLoaded(index, result),
            )
            .abortable();
            fetching.insert(index, handle.abort_on_drop());
            tasks.push(fetch);
        }

        let state = Self {
            services,
            images: HashMap::new(),
            fetching,
        };
        (state, Task::batch(tasks))
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ImageLoaded(index, result) => {
                self.fetching.remove(&index);
                let Some(service) = self.services.get(index) else {
                    log::debug!("Ignoring image for unknown service {index}");
                    return Event::None;
                };
                self.images
                    .insert(index, ImageState::from_result(service.title, result));
                Event::None
            }
            Message::OpenGallery => Event::OpenGallery,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let rtl = ctx.i18n.is_rtl();

        let title = Text::new(ctx.i18n.tr("services-title"))
            .size(typography::DISPLAY)
            .color(palette::CORAL_500);
        let subtitle = Container::new(
            Text::new(ctx.i18n.tr("services-subtitle")).size(typography::BODY_LG),
        )
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.6)
        .align_x(Horizontal::Center);

        let gallery_button = button(
            Text::new(ctx.i18n.tr("services-gallery-button")).size(typography::BODY_LG),
        )
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::OpenGallery);

        let cards = responsive(move |size: Size| self.cards(rtl, size.width));

        let page = Column::new()
            .spacing(spacing::XL)
            .padding([spacing::XXL, spacing::MD])
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .align_x(Horizontal::Center)
            .push(title)
            .push(subtitle)
            .push(cards)
            .push(gallery_button);

        scrollable(
            Container::new(page)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn cards(&self, rtl: bool, width: f32) -> Element<'_, Message> {
        let columns = columns_for_width(width);
        let indexed: Vec<(usize, &'static Service)> =
            self.services.iter().enumerate().collect();

        let rows = indexed.chunks(columns).map(|chunk| {
            let mut cells: Vec<Element<'_, Message>> = chunk
                .iter()
                .map(|&(index, service)| self.card(index, service, rtl))
                .collect();
            for _ in chunk.len()..columns {
                cells.push(Space::new().width(Length::FillPortion(1)).into());
            }
            if rtl {
                cells.reverse();
            }
            Element::from(
                Row::with_children(cells)
                    .spacing(spacing::LG)
                    .width(Length::Fill),
            )
        });

        Column::with_children(rows)
            .spacing(spacing::LG)
            .width(Length::Fill)
            .into()
    }

    fn card(&self, index: usize, service: &'static Service, rtl: bool) -> Element<'_, Message> {
        let align = if rtl {
            Horizontal::Right
        } else {
            Horizontal::Left
        };

        let picture: Element<'_, Message> = match self.images.get(&index) {
            Some(ImageState::Ready(handle)) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(SERVICE_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            _ => Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(SERVICE_IMAGE_HEIGHT))
                .style(styles::container::image_placeholder)
                .into(),
        };

        let body = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .align_x(align)
            .push(Text::new(service.glyph).size(sizing::ICON_LG))
            .push(
                Text::new(service.title)
                    .size(typography::TITLE_SM)
                    .color(palette::CORAL_500),
            )
            .push(
                Text::new(service.description)
                    .size(typography::BODY)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            )
            .push(picture);

        Container::new(body)
            .width(Length::FillPortion(1))
            .height(Length::Shrink)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn mounted() -> State {
        let (state, _task) = State::new(catalog::services(), 640);
        state
    }

    #[test]
    fn mount_fetches_every_service_image() {
        let state = mounted();
        assert_eq!(state.fetching.len(), catalog::services().len());
        assert!(state.images.is_empty());
    }

    #[test]
    fn loaded_image_is_stored() {
        let mut state = mounted();
        let event = state.update(Message::ImageLoaded(0, Ok(Handle::from_bytes(vec![0u8; 4]))));

        assert_eq!(event, Event::None);
        assert!(!state.fetching.contains_key(&0));
        assert!(matches!(state.images.get(&0), Some(ImageState::Ready(_))));
    }

    #[test]
    fn failed_image_is_stored_as_failed() {
        let mut state = mounted();
        let _ = state.update(Message::ImageLoaded(
            3,
            Err(Error::Image("status 500".into())),
        ));
        assert!(matches!(state.images.get(&3), Some(ImageState::Failed)));
    }

    #[test]
    fn image_for_unknown_index_is_ignored() {
        let mut state = mounted();
        let _ = state.update(Message::ImageLoaded(99, Ok(Handle::from_bytes(vec![0u8; 4]))));
        assert!(state.images.is_empty());
    }

    #[test]
    fn gallery_button_emits_event() {
        let mut state = mounted();
        assert_eq!(state.update(Message::OpenGallery), Event::OpenGallery);
    }

    #[test]
    fn services_view_renders() {
        let i18n = I18n::default();
        let state = mounted();
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
