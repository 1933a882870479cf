// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two concerns live here: keyboard navigation for whichever overlay is
//! open, and the autoplay timer for the map slideshow. The timer
//! subscription only exists while the slideshow reports
//! [`autoplay_running`](crate::slideshow::Slideshow::autoplay_running), so
//! pausing or reaching the terminal slide tears it down instead of leaving
//! a timer firing into a paused show.

use super::{App, Message, Screen};
use crate::ui::{directory, map_view, sidebar};
use iced::keyboard::{key::Named, Key};
use iced::{event, time, Subscription};

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let map_open = app.screen == Screen::Directory && app.directory.map.is_some();

    let keyboard = if map_open {
        event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event
            else {
                return None;
            };
            let map = |m| Message::Directory(directory::Message::Map(m));
            match key {
                Key::Named(Named::ArrowLeft) => Some(map(map_view::Message::Previous)),
                Key::Named(Named::ArrowRight) => Some(map(map_view::Message::Next)),
                Key::Named(Named::Escape) => Some(map(map_view::Message::Close)),
                _ => None,
            }
        })
    } else if app.sidebar_open {
        event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::Sidebar(sidebar::Message::Close)),
                _ => None,
            }
        })
    } else {
        Subscription::none()
    };

    let autoplay = if map_open
        && app
            .directory
            .map
            .as_ref()
            .is_some_and(|map| map.slideshow.autoplay_running())
    {
        time::every(app.autoplay.as_duration())
            .map(|_| Message::Directory(directory::Message::Map(map_view::Message::Tick)))
    } else {
        Subscription::none()
    };

    Subscription::batch([keyboard, autoplay])
}
