// SPDX-License-Identifier: MPL-2.0
//! Fallback screen for unknown routes (a bad `--screen` flag).

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container},
    Element, Length,
};

/// Messages emitted by the not-found screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    BackToMenu,
}

/// Render the not-found screen.
pub fn view(large_text: bool) -> Element<'static, Message> {
    let title =
        text("Page not found").size(typography::scaled(typography::TITLE_MD, large_text));
    let hint = text("The screen you were looking for does not exist on this kiosk.")
        .size(typography::scaled(typography::BODY, large_text));

    let back = button(
        container(text("Back to Menu").size(typography::BODY_LG)).center_x(Length::Fill),
    )
    .width(220)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::primary)
    .on_press(Message::BackToMenu);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(hint)
        .push(back);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
