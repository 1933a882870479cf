// SPDX-License-Identifier: MPL-2.0
//! Login screen: the visitor leaves a display name that prefills the
//! inquiry form. No authentication happens here; an empty name simply
//! continues as a guest.

use crate::assets;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, svg, text, text_input, Column, Container},
    Element, Length,
};

/// Login screen state: the name as typed so far.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
}

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    Continue,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The visitor continued; `None` means guest.
    LoggedIn(Option<String>),
}

/// Process a login message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            state.name = name;
            Event::None
        }
        Message::Continue => {
            let trimmed = state.name.trim();
            let name = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
            Event::LoggedIn(name)
        }
    }
}

/// Render the login screen.
pub fn view<'a>(state: &'a State, campus_name: &'a str, large_text: bool) -> Element<'a, Message> {
    let logo = svg(assets::logo()).width(sizing::LOGO).height(sizing::LOGO);

    let title = text("KiosKonnekt")
        .size(typography::scaled(typography::TITLE_LG, large_text));
    let welcome = text(format!("Welcome to {campus_name}"))
        .size(typography::scaled(typography::TITLE_SM, large_text));

    let name_input = text_input("Enter Name", &state.name)
        .on_input(Message::NameChanged)
        .on_submit(Message::Continue)
        .size(typography::scaled(typography::BODY_LG, large_text))
        .padding(spacing::MD);

    let continue_label = if state.name.trim().is_empty() {
        "Continue as Guest"
    } else {
        "Start Exploring"
    };
    let continue_button = button(
        container(text(continue_label).size(typography::BODY_LG)).center_x(Length::Fill),
    )
    .width(260)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::primary)
    .on_press(Message::Continue);

    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .push(logo)
            .push(title)
            .push(welcome)
            .push(name_input)
            .push(continue_button),
    )
    .style(styles::container::card)
    .padding(spacing::MD)
    .max_width(420);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_continues_as_guest() {
        let mut state = State {
            name: "   ".to_string(),
        };
        assert!(matches!(
            update(&mut state, Message::Continue),
            Event::LoggedIn(None)
        ));
    }

    #[test]
    fn entered_name_is_trimmed_and_kept() {
        let mut state = State {
            name: "  Juana  ".to_string(),
        };
        match update(&mut state, Message::Continue) {
            Event::LoggedIn(Some(name)) => assert_eq!(name, "Juana"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
