// SPDX-License-Identifier: MPL-2.0
//! Gallery screen state, message handling and view.

use super::grid::{self, GridContext, REVEAL_DURATION};
use super::sequencer::{self, Sequencer, Ticket};
use super::{ReselectPolicy, Settings};
use crate::domain::gallery::{visible_items, Catalog, Filter, MediaId};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::remote_image::{self, ImageRequest, ImageState};
use crate::ui::widgets::animated_spinner;
use iced::alignment::Horizontal;
use iced::task;
use iced::widget::image::Handle;
use iced::widget::{scrollable, Column, Container};
use iced::{Element, Length, Subscription, Task};
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Frame interval of the spinner and reveal animations.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Message {
    /// A filter pill was pressed.
    SelectCategory(Filter),
    /// The loading delay of a transition elapsed.
    TransitionElapsed(Ticket),
    CardEntered(MediaId),
    CardExited(MediaId),
    /// Animation frame.
    Tick(Instant),
    ImageLoaded(MediaId, Result<Handle, Error>),
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct State {
    catalog: Catalog,
    selected: Filter,
    sequencer: Sequencer,
    settings: Settings,
    /// Abort handle of the running delay; replacing or dropping it cancels
    /// the delay.
    pending: Option<task::Handle>,
    hovered: Option<MediaId>,
    /// Card hovered when the last transition started, with its position.
    hover_anchor: Option<(usize, MediaId)>,
    spinner_rotation: f32,
    now: Instant,
    images: LruCache<MediaId, ImageState>,
    fetching: HashMap<MediaId, task::Handle>,
    client: reqwest::Client,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("selected", &self.selected)
            .field("loading", &self.sequencer.is_loading())
            .field("visible", &self.sequencer.visible().len())
            .field("cached_images", &self.images.len())
            .finish()
    }
}

impl State {
    /// Mounts the gallery on `catalog` with every item visible and starts
    /// fetching their images.
    pub fn new(catalog: Catalog, settings: Settings) -> (Self, Task<Message>) {
        let selected = Filter::default();
        // A settled subset must never evict its own images
        let configured = settings.image_cache_size.value();
        let capacity = NonZeroUsize::new(catalog.items().len())
            .map_or(configured, |items| configured.max(items));
        let mut state = Self {
            catalog,
            selected,
            sequencer: Sequencer::settled(visible_items(&catalog, selected)),
            settings,
            pending: None,
            hovered: None,
            hover_anchor: None,
            spinner_rotation: 0.0,
            now: Instant::now(),
            images: LruCache::new(capacity),
            fetching: HashMap::new(),
            client: reqwest::Client::new(),
        };
        let task = state.request_images();
        (state, task)
    }

    #[must_use]
    pub fn selected(&self) -> Filter {
        self.selected
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.sequencer.is_loading()
    }

    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn hovered(&self) -> Option<MediaId> {
        self.hovered
    }

    /// Fade-in progress of the current subset.
    #[must_use]
    pub fn reveal(&self) -> f32 {
        grid::reveal_progress(self.now.duration_since(self.sequencer.settled_at()))
    }

    fn is_revealing(&self) -> bool {
        !self.sequencer.is_loading()
            && self.now.duration_since(self.sequencer.settled_at()) < REVEAL_DURATION
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.sequencer.is_loading() || self.is_revealing() {
            iced::time::every(ANIMATION_FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectCategory(filter) => self.select(filter),
            Message::TransitionElapsed(ticket) => {
                // The subset comes from the selection at elapse time, not
                // from the one that started this delay
                let items = visible_items(&self.catalog, self.selected);
                if self.sequencer.settle(ticket, items) {
                    self.pending = None;
                    self.now = self.sequencer.settled_at();
                    // The pointer may still rest on the same grid cell
                    let visible = self.sequencer.visible();
                    self.hovered = self
                        .hover_anchor
                        .take()
                        .filter(|&(index, id)| visible.get(index).is_some_and(|item| item.id == id))
                        .map(|(_, id)| id);
                    log::debug!(
                        "Gallery settled on {} with {} items",
                        self.selected,
                        self.sequencer.visible().len()
                    );
                    self.request_images()
                } else {
                    log::debug!("Ignoring stale transition {ticket:?}");
                    Task::none()
                }
            }
            Message::CardEntered(id) => {
                self.hovered = Some(id);
                Task::none()
            }
            Message::CardExited(id) => {
                // Enter of the next card may arrive before exit of the last
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                if self.sequencer.is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                Task::none()
            }
            Message::ImageLoaded(id, result) => {
                self.fetching.remove(&id);
                let what = match self.catalog.find(id) {
                    Some(item) => format!("{} {id}", item.title),
                    None => id.to_string(),
                };
                self.images.put(id, ImageState::from_result(&what, result));
                Task::none()
            }
        }
    }

    fn select(&mut self, filter: Filter) -> Task<Message> {
        if self.settings.reselect == ReselectPolicy::Ignore
            && filter == self.selected
            && !self.sequencer.is_loading()
        {
            return Task::none();
        }

        self.selected = filter;
        if let Some(id) = self.hovered.take() {
            self.hover_anchor = self
                .sequencer
                .visible()
                .iter()
                .position(|item| item.id == id)
                .map(|index| (index, id));
        }
        let ticket = self.sequencer.begin();
        log::debug!("Gallery transition {ticket:?} to {filter}");

        let (delay, handle) = Task::perform(
            sequencer::wait(self.settings.transition_delay, ticket),
            Message::TransitionElapsed,
        )
        .abortable();
        // Dropping the previous handle aborts the superseded delay
        self.pending = Some(handle.abort_on_drop());
        delay
    }

    /// Starts a fetch for every visible item with no cached or in-flight
    /// image.
    fn request_images(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for &item in self.sequencer.visible() {
            // `get` also marks the entry as recently used
            if self.images.get(&item.id).is_some() || self.fetching.contains_key(&item.id) {
                continue;
            }
            let id = item.id;
            let request = ImageRequest::new(item.media_url, self.settings.image_width_hint);
            let (fetch, handle) = Task::perform(
                remote_image::fetch(self.client.clone(), request),
                move |result| Message::ImageLoaded(id, result),
            )
            .abortable();
            self.fetching.insert(id, handle.abort_on_drop());
            tasks.push(fetch);
        }
        Task::batch(tasks)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let grid_ctx = GridContext {
            i18n: ctx.i18n,
            catalog: self.catalog,
            selected: self.selected,
            phase: self.sequencer.phase(),
            hovered: self.hovered,
            images: &self.images,
            reveal: self.reveal(),
            spinner_rotation: self.spinner_rotation,
            rtl: ctx.i18n.is_rtl(),
        };

        let page = Column::new()
            .spacing(spacing::XL)
            .padding([spacing::XXL, spacing::MD])
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(grid::header(&grid_ctx))
            .push(grid::filter_bar(&grid_ctx))
            .push(grid::content(grid_ctx));

        scrollable(
            Container::new(page)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Category, CategoryFilter, MediaItem};
    use crate::domain::ui::TransitionDelay;
    use crate::ui::gallery::sequencer::Phase;

    const fn item(id: u32, category: Category) -> MediaItem {
        MediaItem {
            id: MediaId(id),
            title: "item",
            category,
            media_url: "https://example.com/image.jpg?w=800",
            description: "",
        }
    }

    static ITEMS: [MediaItem; 3] = [
        item(1, Category::Drinks),
        item(2, Category::Drinks),
        item(3, Category::Food),
    ];

    static FILTERS: [CategoryFilter; 3] = [
        CategoryFilter {
            id: Filter::All,
            label: "all",
            icon: None,
        },
        CategoryFilter {
            id: Filter::Only(Category::Drinks),
            label: "drinks",
            icon: None,
        },
        CategoryFilter {
            id: Filter::Only(Category::Food),
            label: "food",
            icon: None,
        },
    ];

    fn mounted(settings: Settings) -> State {
        let (state, _task) = State::new(Catalog::new(&ITEMS, &FILTERS), settings);
        state
    }

    fn latest_ticket(state: &State) -> Ticket {
        state.sequencer.latest().expect("a transition was started")
    }

    fn visible_ids(state: &State) -> Vec<u32> {
        state.sequencer.visible().iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn mounts_settled_on_all_items() {
        let state = mounted(Settings::default());
        assert_eq!(state.selected(), Filter::All);
        assert!(!state.is_loading());
        assert_eq!(visible_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn mount_requests_every_visible_image() {
        let state = mounted(Settings::default());
        assert_eq!(state.fetching.len(), 3);
    }

    #[test]
    fn selecting_enters_loading_immediately() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Food)));

        assert!(state.is_loading());
        assert!(state.sequencer.visible().is_empty());
        assert!(state.pending.is_some());
    }

    #[test]
    fn elapsed_delay_settles_on_selected_subset() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Drinks)));
        let ticket = latest_ticket(&state);

        let _ = state.handle_message(Message::TransitionElapsed(ticket));

        assert!(!state.is_loading());
        assert_eq!(visible_ids(&state), vec![1, 2]);
        assert!(state.pending.is_none());
    }

    #[test]
    fn last_selection_wins_and_settles_once() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Drinks)));
        let first = latest_ticket(&state);
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Food)));
        let second = latest_ticket(&state);

        let _ = state.handle_message(Message::TransitionElapsed(first));
        assert!(state.is_loading());

        let _ = state.handle_message(Message::TransitionElapsed(second));
        assert_eq!(visible_ids(&state), vec![3]);

        let settled = state.sequencer.settled_at();
        let _ = state.handle_message(Message::TransitionElapsed(second));
        assert_eq!(state.sequencer.settled_at(), settled);
    }

    #[test]
    fn empty_category_settles_to_empty_subset() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Events)));
        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));

        assert_eq!(state.sequencer.phase(), &Phase::Settled(Vec::new()));
    }

    #[test]
    fn reselect_replays_transition_by_default() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::SelectCategory(Filter::All));

        assert!(state.is_loading());
        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));
        assert_eq!(visible_ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn reselect_can_be_ignored() {
        let mut state = mounted(Settings {
            reselect: ReselectPolicy::Ignore,
            ..Settings::default()
        });
        let _ = state.handle_message(Message::SelectCategory(Filter::All));

        assert!(!state.is_loading());
        assert!(state.sequencer.latest().is_none());
    }

    #[test]
    fn ignore_policy_still_switches_to_other_filter() {
        let mut state = mounted(Settings {
            reselect: ReselectPolicy::Ignore,
            ..Settings::default()
        });
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Food)));
        assert!(state.is_loading());
    }

    #[test]
    fn ticket_from_unmounted_gallery_is_ignored() {
        let mut old = mounted(Settings::default());
        let _ = old.handle_message(Message::SelectCategory(Filter::Only(Category::Food)));
        let stale = latest_ticket(&old);
        drop(old);

        let mut fresh = mounted(Settings::default());
        let _ = fresh.handle_message(Message::TransitionElapsed(stale));
        assert_eq!(visible_ids(&fresh), vec![1, 2, 3]);
    }

    #[test]
    fn hover_tracks_last_entered_card() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::CardEntered(MediaId(1)));
        let _ = state.handle_message(Message::CardEntered(MediaId(2)));
        let _ = state.handle_message(Message::CardExited(MediaId(1)));
        assert_eq!(state.hovered(), Some(MediaId(2)));

        let _ = state.handle_message(Message::CardExited(MediaId(2)));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn hover_survives_transition_when_card_keeps_its_cell() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::CardEntered(MediaId(2)));
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Drinks)));
        assert_eq!(state.hovered(), None);

        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));
        assert_eq!(state.hovered(), Some(MediaId(2)));
    }

    #[test]
    fn hover_is_dropped_when_another_card_takes_the_cell() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::CardEntered(MediaId(3)));
        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Food)));
        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));

        // Item 3 moved from the third cell to the first
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn small_cache_still_holds_every_catalog_image() {
        let (mut state, _task) = State::new(
            crate::catalog::cafe(),
            Settings {
                image_cache_size: crate::domain::ui::ImageCacheSize::new(4),
                ..Settings::default()
            },
        );
        for item in crate::catalog::items() {
            let _ = state.handle_message(Message::ImageLoaded(
                item.id,
                Ok(Handle::from_bytes(vec![0u8; 4])),
            ));
        }

        let with_image = state
            .sequencer
            .visible()
            .iter()
            .filter(|item| matches!(state.images.peek(&item.id), Some(ImageState::Ready(_))))
            .count();
        assert_eq!(with_image, crate::catalog::items().len());
        assert!(state.fetching.is_empty());
    }

    #[test]
    fn failed_image_is_cached_as_failed() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::ImageLoaded(
            MediaId(1),
            Err(Error::Image("status 404".into())),
        ));

        assert!(!state.fetching.contains_key(&MediaId(1)));
        assert!(matches!(
            state.images.peek(&MediaId(1)),
            Some(ImageState::Failed)
        ));
    }

    #[test]
    fn loaded_images_are_not_requested_again() {
        let mut state = mounted(Settings::default());
        for id in 1..=3 {
            let _ = state.handle_message(Message::ImageLoaded(
                MediaId(id),
                Ok(Handle::from_bytes(vec![0u8; 4])),
            ));
        }
        let _ = state.handle_message(Message::SelectCategory(Filter::All));
        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));

        assert!(state.fetching.is_empty());
    }

    #[test]
    fn spinner_turns_only_while_loading() {
        let mut state = mounted(Settings::default());
        let _ = state.handle_message(Message::Tick(Instant::now()));
        assert_eq!(state.spinner_rotation, 0.0);

        let _ = state.handle_message(Message::SelectCategory(Filter::All));
        let _ = state.handle_message(Message::Tick(Instant::now()));
        assert!(state.spinner_rotation > 0.0);
    }

    #[test]
    fn reveal_completes_after_reveal_duration() {
        let mut state = mounted(Settings {
            transition_delay: TransitionDelay::new(0),
            ..Settings::default()
        });
        let _ = state.handle_message(Message::SelectCategory(Filter::All));
        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));
        assert!(state.is_revealing());
        assert!(state.reveal() < 0.5);

        let later = state.sequencer.settled_at() + REVEAL_DURATION;
        let _ = state.handle_message(Message::Tick(later));
        assert!(!state.is_revealing());
        assert_eq!(state.reveal(), 1.0);
    }

    #[test]
    fn view_renders_each_phase() {
        let i18n = I18n::default();
        let mut state = mounted(Settings::default());
        let _ = state.view(ViewContext { i18n: &i18n });

        let _ = state.handle_message(Message::SelectCategory(Filter::Only(Category::Events)));
        let _ = state.view(ViewContext { i18n: &i18n });

        let ticket = latest_ticket(&state);
        let _ = state.handle_message(Message::TransitionElapsed(ticket));
        let _ = state.view(ViewContext { i18n: &i18n });
    }
}
