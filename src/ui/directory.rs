// SPDX-License-Identifier: MPL-2.0
//! Office directory page: one card per office, with the wayfinding map
//! overlay for offices that have slides.

use crate::content::directory::{Office, DIRECTORY};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::map_view;
use crate::ui::styles;
use iced::{
    widget::{button, scrollable, text, Column, Container, Row},
    Element, Length,
};

/// Directory page state: the open map overlay, if any.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub map: Option<map_view::State>,
}

impl State {
    /// The office whose map is open, if any.
    pub fn open_office(&self) -> Option<&'static Office> {
        self.map
            .as_ref()
            .and_then(|map| DIRECTORY.get(map.office_index()))
    }
}

/// Messages emitted by the directory page.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ViewMap(usize),
    Map(map_view::Message),
}

/// Process a directory message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ViewMap(index) => {
            if let Some(office) = DIRECTORY.get(index) {
                if office.has_map() {
                    state.map = Some(map_view::State::new(index, office));
                }
            }
        }
        Message::Map(message) => {
            if let Some(map) = state.map.as_mut() {
                if map_view::update(map, message) == map_view::Event::Close {
                    state.map = None;
                }
            }
        }
    }
}

/// Render the directory card list (the overlay is layered by the parent).
pub fn view(large_text: bool) -> Element<'static, Message> {
    let list = DIRECTORY
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::SM), |column, (index, office)| {
            column.push(card(office, index, large_text))
        });

    Container::new(
        scrollable(list.padding(spacing::MD))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .into()
}

fn card(office: &Office, index: usize, large_text: bool) -> Element<'static, Message> {
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            text(office.name)
                .size(typography::scaled(typography::BODY_LG, large_text))
                .color(palette::PRIMARY_500),
        )
        .push(text(office.location).size(typography::scaled(typography::BODY, large_text)))
        .push(
            text(office.phone)
                .size(typography::scaled(typography::CAPTION, large_text))
                .color(palette::GRAY_400),
        )
        .push(
            text(office.email)
                .size(typography::scaled(typography::CAPTION, large_text))
                .color(palette::GRAY_400),
        );

    if office.has_map() {
        details = details.push(
            button(text("View Map").size(typography::scaled(typography::BODY, large_text)))
                .height(sizing::BUTTON_HEIGHT)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::ViewMap(index)),
        );
    }

    Container::new(Row::new().push(details))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_map_opens_the_overlay_for_offices_with_slides() {
        let mut state = State::default();
        update(&mut state, Message::ViewMap(0));
        assert!(state.map.is_some());
        assert_eq!(state.open_office().map(|o| o.name), Some("Registrar's Office"));
    }

    #[test]
    fn view_map_is_ignored_for_offices_without_slides() {
        let guidance = DIRECTORY
            .iter()
            .position(|o| !o.has_map())
            .expect("no office without a map");

        let mut state = State::default();
        update(&mut state, Message::ViewMap(guidance));
        assert!(state.map.is_none());
    }

    #[test]
    fn closing_the_overlay_clears_the_map_state() {
        let mut state = State::default();
        update(&mut state, Message::ViewMap(0));
        update(&mut state, Message::Map(map_view::Message::Close));
        assert!(state.map.is_none());
    }

    #[test]
    fn map_messages_reach_the_slideshow() {
        let mut state = State::default();
        update(&mut state, Message::ViewMap(0));
        update(&mut state, Message::Map(map_view::Message::Next));

        let map = state.map.as_ref().expect("overlay closed unexpectedly");
        assert_eq!(map.slideshow.current_index(), Some(1));
    }
}
