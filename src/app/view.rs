// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen, then layers the map overlay and the sidebar
//! on top with `stack`. The color scheme and text scaling come from the
//! persisted accessibility toggles.

use super::persisted_state::KioskState;
use super::{Message, Screen};
use crate::config::Config;
use crate::ui::theming::ColorScheme;
use crate::ui::{
    announcements, calendar, directory, faqs, header, home, inquiry, login, map_view, menu,
    not_found, sidebar, styles,
};
use iced::{
    widget::{container, mouse_area, stack, Column, Container, Row, Space},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub config: &'a Config,
    pub kiosk_state: &'a KioskState,
    pub screen: Screen,
    pub sidebar_open: bool,
    pub login: &'a login::State,
    pub faqs: &'a faqs::State,
    pub directory: &'a directory::State,
    pub inquiry_form: &'a inquiry::State,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let accessibility = &ctx.kiosk_state.accessibility;
    let scheme = ColorScheme::for_accessibility(accessibility.high_contrast);
    let large_text = accessibility.large_text;

    let page: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(large_text).map(Message::Home),
        Screen::Login => {
            login::view(ctx.login, ctx.config.campus_name(), large_text).map(Message::Login)
        }
        Screen::Menu => menu::view(large_text).map(Message::Menu),
        Screen::Faqs => faqs::view(ctx.faqs, large_text).map(Message::Faqs),
        Screen::Directory => directory::view(large_text).map(Message::Directory),
        Screen::Announcements => announcements::view(large_text).map(Message::Announcements),
        Screen::Calendar => calendar::view(large_text).map(Message::Calendar),
        Screen::Inquiry => inquiry::view(ctx.inquiry_form, large_text).map(Message::Inquiry),
        Screen::NotFound => not_found::view(large_text).map(Message::NotFound),
    };

    let mut column = Column::new();
    if ctx.screen.has_header() {
        column = column.push(
            header::view(header::ViewContext {
                title: ctx.screen.title(),
                large_text,
                show_back: ctx.screen != Screen::Menu,
            })
            .map(Message::Header),
        );
    }
    column = column.push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page_background(&scheme));

    let mut layers = stack![base];

    if ctx.screen == Screen::Directory {
        if let (Some(map), Some(office)) = (ctx.directory.map.as_ref(), ctx.directory.open_office())
        {
            layers = layers.push(
                map_view::view(map, office, &scheme, large_text)
                    .map(|m| Message::Directory(directory::Message::Map(m))),
            );
        }
    }

    if ctx.sidebar_open {
        layers = layers.push(sidebar_overlay(accessibility, &scheme));
    }

    layers.into()
}

/// Scrim with the sidebar panel docked to the right edge. Tapping the
/// scrim closes the panel.
fn sidebar_overlay<'a>(
    accessibility: &'a super::persisted_state::Accessibility,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let scrim = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim(scheme)),
    )
    .on_press(Message::Sidebar(sidebar::Message::Close));

    let panel = sidebar::view(sidebar::ViewContext { accessibility }).map(Message::Sidebar);

    stack![
        scrim,
        Row::new()
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .push(panel)
    ]
    .into()
}
