// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the kiosk screens.
//!
//! The `App` struct wires together the screens, the operator configuration,
//! and the persisted visitor state, and translates component events into
//! side effects like state persistence or inquiry submission. Policy
//! decisions (where the back button goes, when state is saved, what logout
//! clears) live close to the update loop so visitor-facing behavior is easy
//! to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::slideshow::AutoplayInterval;
use crate::ui::{directory, faqs, inquiry, login};
use iced::{window, Element, Subscription, Theme};
use persisted_state::KioskState;
use std::fmt;

/// Root Iced application state bridging the screens and persistence.
pub struct App {
    config: Config,
    kiosk_state: KioskState,
    screen: Screen,
    sidebar_open: bool,
    autoplay: AutoplayInterval,
    login: login::State,
    faqs: faqs::State,
    directory: directory::State,
    inquiry_form: inquiry::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("sidebar_open", &self.sidebar_open)
            .finish()
    }
}

/// Builds the window settings from the operator configuration.
///
/// Kiosk deployments run borderless at a fixed portrait size; setting
/// `fullscreen = false` in `settings.toml` restores the decorations for
/// maintenance sessions.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        decorations: !config.fullscreen.unwrap_or(true),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let settings = window_settings(&config::load().unwrap_or_default());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: Config::default(),
            kiosk_state: KioskState::default(),
            screen: Screen::Home,
            sidebar_open: false,
            autoplay: AutoplayInterval::default(),
            login: login::State::default(),
            faqs: faqs::State::default(),
            directory: directory::State::default(),
            inquiry_form: inquiry::State::default(),
        }
    }
}

impl App {
    /// Initializes application state from the launch flags, the operator
    /// configuration, and the persisted kiosk state.
    fn new(flags: Flags) -> (Self, iced::Task<Message>) {
        let config = config::load().unwrap_or_default();
        let (kiosk_state, warning) = KioskState::load();
        if let Some(warning) = warning {
            eprintln!("warning: {warning}");
        }

        let autoplay = AutoplayInterval::new(
            config
                .autoplay_interval_ms
                .unwrap_or(config::DEFAULT_AUTOPLAY_INTERVAL_MS),
        );

        let screen = flags
            .screen
            .as_deref()
            .map(Screen::from_path)
            .unwrap_or_default();

        let inquiry_form =
            inquiry::State::with_visitor_name(kiosk_state.visitor_name.as_deref());

        let app = App {
            config,
            kiosk_state,
            screen,
            autoplay,
            inquiry_form,
            ..Self::default()
        };

        (app, iced::Task::none())
    }

    fn title(&self) -> String {
        format!("KiosKonnekt - {}", self.screen.title())
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            config: &self.config,
            kiosk_state: &self.kiosk_state,
            screen: self.screen,
            sidebar_open: self.sidebar_open,
            login: &self.login,
            faqs: &self.faqs,
            directory: &self.directory,
            inquiry_form: &self.inquiry_form,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Write the persisted kiosk state, logging rather than surfacing
    /// failures. A full disk must not take the kiosk down.
    fn persist_state(&self) {
        if let Some(warning) = self.kiosk_state.save() {
            eprintln!("warning: {warning}");
        }
    }
}
