// SPDX-License-Identifier: MPL-2.0
//! Announcements page: dated cards, urgent ones with the gold accent.

use crate::content::announcements::{Announcement, ANNOUNCEMENTS};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{container, scrollable, text, Column, Container, Row},
    Element, Length,
};

/// Render the announcements page body.
pub fn view(large_text: bool) -> Element<'static, Message> {
    let list = ANNOUNCEMENTS
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, item| {
            column.push(card(item, large_text))
        });

    Container::new(
        scrollable(list.padding(spacing::MD))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .into()
}

/// Messages emitted by the announcements page (none; it is read-only).
#[derive(Debug, Clone, Copy)]
pub enum Message {}

fn card(item: &Announcement, large_text: bool) -> Element<'static, Message> {
    let mut heading = Row::new().spacing(spacing::SM);
    if item.urgent {
        heading = heading.push(
            container(
                text("URGENT")
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_500),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge(palette::GOLD_500)),
        );
    }
    heading = heading.push(
        text(item.title)
            .size(typography::scaled(typography::BODY_LG, large_text))
            .color(palette::PRIMARY_500),
    );

    let date = text(item.date)
        .size(typography::CAPTION)
        .color(palette::GRAY_400);
    let body = text(item.body).size(typography::scaled(typography::BODY, large_text));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(date)
        .push(body);

    let style = if item.urgent {
        styles::container::accent_card
    } else {
        styles::container::card
    };

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(style)
        .into()
}
