// SPDX-License-Identifier: MPL-2.0
//! Slide-in sidebar panel for app-level navigation and accessibility.
//!
//! The panel offers Home, the two accessibility toggles, and Exit
//! (logout back to the welcome screen). It overlays the right edge of
//! whichever page opened it.

use crate::app::persisted_state::Accessibility;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, toggler, Column, Container, Row},
    Element, Length,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub accessibility: &'a Accessibility,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Close,
    GoHome,
    SetHighContrast(bool),
    SetLargeText(bool),
    Exit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    GoHome,
    SetHighContrast(bool),
    SetLargeText(bool),
    Exit,
}

/// Process a sidebar message and return the corresponding event.
///
/// Navigation closes the panel; the accessibility toggles keep it open so
/// the visitor can try both settings without reopening it.
pub fn update(open: &mut bool, message: Message) -> Event {
    match message {
        Message::Close => {
            *open = false;
            Event::None
        }
        Message::GoHome => {
            *open = false;
            Event::GoHome
        }
        Message::SetHighContrast(value) => Event::SetHighContrast(value),
        Message::SetLargeText(value) => Event::SetLargeText(value),
        Message::Exit => {
            *open = false;
            Event::Exit
        }
    }
}

/// Render the sidebar panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let close = button(text("✕").size(typography::BODY_LG))
        .style(styles::button::scrim_icon)
        .on_press(Message::Close);

    let close_row = Row::new()
        .width(Length::Fill)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(close);

    let home = entry("⌂", "Home", Message::GoHome);
    let exit = entry("⎋", "Exit", Message::Exit);

    let high_contrast = toggler(ctx.accessibility.high_contrast)
        .label("High contrast")
        .text_size(typography::BODY)
        .on_toggle(Message::SetHighContrast);

    let large_text = toggler(ctx.accessibility.large_text)
        .label("Large text")
        .text_size(typography::BODY)
        .on_toggle(Message::SetLargeText);

    let accessibility = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(text("Accessibility").size(typography::CAPTION))
        .push(high_contrast)
        .push(large_text);

    let content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(close_row)
        .push(home)
        .push(accessibility)
        .push(exit);

    Container::new(content)
        .width(sizing::SIDEBAR_WIDTH)
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn entry(icon: &str, label: &str, message: Message) -> Element<'static, Message> {
    button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(text(icon.to_string()).size(typography::BODY_LG))
            .push(text(label.to_string()).size(typography::BODY_LG)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::sidebar_entry)
    .on_press(message)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_messages_close_the_panel() {
        let mut open = true;
        assert!(matches!(update(&mut open, Message::GoHome), Event::GoHome));
        assert!(!open);

        let mut open = true;
        assert!(matches!(update(&mut open, Message::Exit), Event::Exit));
        assert!(!open);
    }

    #[test]
    fn accessibility_toggles_keep_the_panel_open() {
        let mut open = true;
        assert!(matches!(
            update(&mut open, Message::SetHighContrast(true)),
            Event::SetHighContrast(true)
        ));
        assert!(open);

        assert!(matches!(
            update(&mut open, Message::SetLargeText(true)),
            Event::SetLargeText(true)
        ));
        assert!(open);
    }
}
