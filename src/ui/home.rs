// SPDX-License-Identifier: MPL-2.0
//! Welcome screen: logo, tagline, and the call to action.

use crate::assets;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, svg, text, Column, Container},
    Element, Length,
};

/// Messages emitted by the home screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Explore,
}

/// Render the welcome screen.
pub fn view(large_text: bool) -> Element<'static, Message> {
    let logo = svg(assets::logo()).width(sizing::LOGO).height(sizing::LOGO);

    let title = text("KiosKonnekt")
        .size(typography::scaled(typography::TITLE_LG, large_text));
    let tagline = text("\"Your all-in-one campus information kiosk\"")
        .size(typography::scaled(typography::BODY, large_text));

    let explore = button(
        container(text("Explore Services").size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .width(260)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::primary)
    .on_press(Message::Explore);

    let card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .push(logo)
            .push(title)
            .push(tagline)
            .push(explore),
    )
    .style(styles::container::card)
    .padding(spacing::MD);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
