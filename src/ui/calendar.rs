// SPDX-License-Identifier: MPL-2.0
//! School calendar page: the kind legend plus one card per event.

use crate::content::calendar::{CalendarEvent, EventKind, CALENDAR};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{container, scrollable, text, Column, Container, Row, Space},
    Element, Length,
};

/// Messages emitted by the calendar page (none; it is read-only).
#[derive(Debug, Clone, Copy)]
pub enum Message {}

/// Render the calendar page body.
pub fn view(large_text: bool) -> Element<'static, Message> {
    let legend = EventKind::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(legend_chip(*kind))
        });

    let list = CALENDAR
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, event| {
            column.push(card(event, large_text))
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(scrollable(legend).width(Length::Fill))
        .push(scrollable(list).height(Length::Fill));

    Container::new(content).into()
}

fn legend_chip(kind: EventKind) -> Element<'static, Message> {
    let dot = container(Space::new().width(sizing::DOT_SIZE).height(sizing::DOT_SIZE))
        .style(styles::container::badge(kind.color()));

    container(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(dot)
            .push(text(kind.label()).size(typography::CAPTION)),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::card)
    .into()
}

fn card(event: &CalendarEvent, large_text: bool) -> Element<'static, Message> {
    let date_block = container(
        text(event.date)
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .width(72)
    .height(56)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::container::badge(event.kind.color()));

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(event.label)
                .size(typography::scaled(typography::BODY_LG, large_text))
                .color(palette::PRIMARY_500),
        )
        .push(
            container(
                text(event.kind.label())
                    .size(typography::CAPTION)
                    .color(palette::WHITE),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge(event.kind.color())),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(date_block)
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}
