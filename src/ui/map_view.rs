// SPDX-License-Identifier: MPL-2.0
//! Wayfinding map overlay: a modal slideshow of walking-direction slides
//! for one office.
//!
//! The overlay owns a [`Slideshow`] and translates widget interactions into
//! its transitions. Hovering the slide area pauses autoplay, the arrows and
//! dots navigate, and the parent tears the autoplay subscription down
//! whenever [`Slideshow::autoplay_running`] goes false.

use crate::assets;
use crate::content::directory::Office;
use crate::slideshow::Slideshow;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, svg, text, Column, Container, Row},
    Element, Length,
};

/// Map overlay state for one office.
#[derive(Debug, Clone)]
pub struct State {
    office_index: usize,
    pub slideshow: Slideshow,
}

impl State {
    /// Open the overlay for the office at `office_index` in the directory.
    pub fn new(office_index: usize, office: &Office) -> Self {
        Self {
            office_index,
            slideshow: Slideshow::new(
                office.map_slides.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    pub fn office_index(&self) -> usize {
        self.office_index
    }
}

/// Messages emitted by the map overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    HoverEntered,
    HoverExited,
    Tick,
    Close,
}

/// What the parent must act on after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

/// Process a map overlay message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Next => state.slideshow.next(),
        Message::Previous => state.slideshow.previous(),
        Message::GoTo(index) => state.slideshow.go_to(index),
        Message::HoverEntered => state.slideshow.pause(),
        Message::HoverExited => state.slideshow.resume(),
        Message::Tick => state.slideshow.tick(),
        Message::Close => return Event::Close,
    }
    Event::None
}

/// Render the overlay: scrim, card with the office details, the current
/// slide with hover tracking, arrows, and pagination dots.
pub fn view<'a>(
    state: &'a State,
    office: &'a Office,
    scheme: &ColorScheme,
    large_text: bool,
) -> Element<'a, Message> {
    let close = button(
        container(text("✕").size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::TOUCH_TARGET)
    .height(sizing::TOUCH_TARGET)
    .style(styles::button::scrim_icon)
    .on_press(Message::Close);

    let heading = Row::new()
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(
                    text(office.name)
                        .size(typography::scaled(typography::TITLE_SM, large_text))
                        .color(palette::PRIMARY_500),
                )
                .push(
                    text(office.description)
                        .size(typography::scaled(typography::CAPTION, large_text))
                        .color(palette::GRAY_400),
                ),
        )
        .push(close);

    let card = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(slide_area(state))
        .push(dots(state));

    let card = Container::new(card)
        .width(Length::Fixed(420.0))
        .padding(spacing::MD)
        .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::scrim(scheme))
        .into()
}

fn slide_area(state: &State) -> Element<'_, Message> {
    let slide: Element<'_, Message> = match state.slideshow.current_slide() {
        Some(id) => svg(assets::slide(id))
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .into(),
        None => container(text("No map available").size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let arrows = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(arrow("‹", Message::Previous, !state.slideshow.is_at_first()))
        .push(iced::widget::Space::new().width(Length::Fill).height(Length::Shrink))
        .push(arrow("›", Message::Next, !state.slideshow.is_at_last()));

    let layered = iced::widget::stack![
        slide,
        container(arrows)
            .height(Length::Fixed(260.0))
            .center_y(Length::Fill)
            .padding(spacing::XS),
    ];

    // Pointer over the slide pauses autoplay so visitors can read at
    // their own pace; leaving resumes unless the show is on the last slide.
    mouse_area(layered)
        .on_enter(Message::HoverEntered)
        .on_exit(Message::HoverExited)
        .into()
}

fn arrow(glyph: &str, message: Message, enabled: bool) -> Element<'_, Message> {
    let mut arrow = button(
        container(text(glyph).size(typography::TITLE_SM))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::TOUCH_TARGET)
    .height(sizing::TOUCH_TARGET)
    .style(styles::button::slide_arrow);

    if enabled {
        arrow = arrow.on_press(message);
    }
    arrow.into()
}

fn dots(state: &State) -> Element<'_, Message> {
    let active = state.slideshow.current_index();
    let row = (0..state.slideshow.len()).fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, index| {
            row.push(
                button("")
                    .width(sizing::DOT_SIZE)
                    .height(sizing::DOT_SIZE)
                    .style(styles::button::pagination_dot(active == Some(index)))
                    .on_press(Message::GoTo(index)),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::directory::DIRECTORY;

    fn registrar_state() -> State {
        State::new(0, &DIRECTORY[0])
    }

    #[test]
    fn opening_an_office_loads_its_slides() {
        let state = registrar_state();
        assert_eq!(state.slideshow.len(), DIRECTORY[0].map_slides.len());
        assert_eq!(state.slideshow.current_index(), Some(0));
        assert!(state.slideshow.autoplay_running());
    }

    #[test]
    fn hover_messages_pause_and_resume() {
        let mut state = registrar_state();
        assert_eq!(update(&mut state, Message::HoverEntered), Event::None);
        assert!(state.slideshow.is_paused());

        update(&mut state, Message::HoverExited);
        assert!(!state.slideshow.is_paused());
    }

    #[test]
    fn ticks_walk_the_slides_and_stop_at_the_end() {
        let mut state = registrar_state();
        let last = state.slideshow.len() - 1;
        for _ in 0..10 {
            update(&mut state, Message::Tick);
        }
        assert_eq!(state.slideshow.current_index(), Some(last));
        assert!(!state.slideshow.autoplay_running());
    }

    #[test]
    fn close_message_surfaces_the_close_event() {
        let mut state = registrar_state();
        assert_eq!(update(&mut state, Message::Close), Event::Close);
    }

    #[test]
    fn dot_press_jumps_to_that_slide() {
        let mut state = registrar_state();
        update(&mut state, Message::GoTo(2));
        assert_eq!(state.slideshow.current_index(), Some(2));
    }
}
