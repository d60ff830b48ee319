// SPDX-License-Identifier: MPL-2.0
//! Application root state and navigation between the gallery, services and
//! about screens.
//!
//! The gallery and services screens are mounted only while shown. Leaving
//! one drops its state, which aborts any pending transition delay and image
//! fetch.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog;
use crate::domain::ui::TransitionDelay;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::gallery::{self, Settings as GallerySettings};
use crate::ui::navbar;
use crate::ui::services;
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: Option<gallery::State>,
    services: Option<services::State>,
    gallery_settings: GallerySettings,
    /// Settings as loaded, updated when preferences change.
    config: Config,
    /// Where preferences are saved; `None` resolves the default directory.
    config_dir: Option<PathBuf>,
    theme: Theme,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// i18n key of a startup warning shown until dismissed.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery_mounted", &self.gallery.is_some())
            .field("services_mounted", &self.services.is_some())
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the application from an already loaded configuration.
    fn with_config(
        flags: Flags,
        config: &Config,
        warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);

        let mut gallery_settings = config.gallery.to_settings();
        if let Some(delay_ms) = flags.delay_ms {
            gallery_settings.transition_delay = TransitionDelay::new(delay_ms);
        }

        log::info!(
            "Starting with locale {} and {} ms transition delay",
            i18n.current_locale(),
            gallery_settings.transition_delay.value()
        );

        let mut app = App {
            i18n,
            screen: Screen::Gallery,
            gallery: None,
            services: None,
            gallery_settings,
            config: config.clone(),
            config_dir: flags.config_dir.map(PathBuf::from),
            theme: AppTheme::new(config.general.theme_mode).to_iced(),
            menu_open: false,
            warning,
        };
        let task = app.mount_gallery();
        (app, task)
    }

    fn mount_gallery(&mut self) -> Task<Message> {
        let (state, task) = gallery::State::new(catalog::cafe(), self.gallery_settings);
        self.gallery = Some(state);
        task.map(Message::Gallery)
    }

    fn mount_services(&mut self) -> Task<Message> {
        let (state, task) =
            services::State::new(catalog::services(), self.gallery_settings.image_width_hint);
        self.services = Some(state);
        task.map(Message::Services)
    }

    fn is_mounted(&self, screen: Screen) -> bool {
        match screen {
            Screen::Gallery => self.gallery.is_some(),
            Screen::Services => self.services.is_some(),
            Screen::About => true,
        }
    }

    /// Shows `screen`, unmounting whichever stateful screen it replaces.
    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        if self.screen == screen && self.is_mounted(screen) {
            return Task::none();
        }
        self.screen = screen;

        if screen != Screen::Gallery && self.gallery.take().is_some() {
            log::debug!("Gallery unmounted");
        }
        if screen != Screen::Services && self.services.take().is_some() {
            log::debug!("Services unmounted");
        }

        match screen {
            Screen::Gallery => self.mount_gallery(),
            Screen::Services => self.mount_services(),
            Screen::About => Task::none(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Gallery => app_name,
            Screen::Services => format!("{} - {app_name}", self.i18n.tr("menu-services")),
            Screen::About => format!("{} - {app_name}", self.i18n.tr("menu-about")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.gallery {
            Some(gallery) => gallery.subscription().map(Message::Gallery),
            None => Subscription::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => match &mut self.gallery {
                Some(gallery) => gallery
                    .handle_message(gallery_message)
                    .map(Message::Gallery),
                None => {
                    log::debug!("Dropping gallery message after unmount: {gallery_message:?}");
                    Task::none()
                }
            },
            Message::Services(services_message) => match &mut self.services {
                Some(services) => match services.update(services_message) {
                    services::Event::None => Task::none(),
                    services::Event::OpenGallery => self.navigate(Screen::Gallery),
                },
                None => {
                    log::debug!("Dropping services message after unmount: {services_message:?}");
                    Task::none()
                }
            },
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message, &mut self.menu_open) {
                    navbar::Event::None => Task::none(),
                    navbar::Event::OpenGallery => self.navigate(Screen::Gallery),
                    navbar::Event::OpenServices => self.navigate(Screen::Services),
                    navbar::Event::OpenAbout => self.navigate(Screen::About),
                    navbar::Event::SelectLanguage(locale) => {
                        persistence::apply_language_change(
                            &mut self.i18n,
                            &mut self.config,
                            self.config_dir.clone(),
                            locale,
                        );
                        Task::none()
                    }
                }
            }
            Message::About(about_message) => match about::update(&about_message) {
                about::Event::BackToGallery => self.navigate(Screen::Gallery),
            },
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: self.gallery.as_ref(),
            services: self.services.as_ref(),
            menu_open: self.menu_open,
            warning: self.warning.as_deref(),
        })
    }
}
