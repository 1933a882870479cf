// SPDX-License-Identifier: MPL-2.0
//! Shared header bar across the content pages: back arrow, page title, and
//! the sidebar toggle.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Container, Row, Space},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub large_text: bool,
    /// Whether the back arrow is shown (the menu page has nowhere to go back to).
    pub show_back: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Back,
    OpenSidebar,
}

/// Render the header bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    if ctx.show_back {
        let back = button(
            container(text("←").size(typography::TITLE_MD))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(sizing::TOUCH_TARGET)
        .height(sizing::TOUCH_TARGET)
        .style(styles::button::header_icon)
        .on_press(Message::Back);
        row = row.push(back);
    } else {
        row = row.push(Space::new().width(sizing::TOUCH_TARGET));
    }

    let title = container(
        text(ctx.title.to_string())
            .size(typography::scaled(typography::TITLE_MD, ctx.large_text)),
    )
    .center_x(Length::Fill);

    let menu = button(
        container(text("☰").size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::TOUCH_TARGET)
    .height(sizing::TOUCH_TARGET)
    .style(styles::button::header_icon)
    .on_press(Message::OpenSidebar);

    row = row.push(title).push(menu);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::HEADER_HEIGHT)
        .style(styles::container::header)
        .into()
}
