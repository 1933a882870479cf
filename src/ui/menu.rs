// SPDX-License-Identifier: MPL-2.0
//! Main menu: the grid of service tiles.

use crate::app::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container, Row},
    Element, Length,
};

/// One tile on the menu grid.
struct MenuItem {
    icon: &'static str,
    label: &'static str,
    target: Screen,
}

/// The five service tiles, laid out 3 + 2 as on the original kiosk.
const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem { icon: "?", label: "FAQs", target: Screen::Faqs },
    MenuItem { icon: "🏢", label: "Directory", target: Screen::Directory },
    MenuItem { icon: "📣", label: "Announcements", target: Screen::Announcements },
    MenuItem { icon: "📅", label: "School Calendar", target: Screen::Calendar },
    MenuItem { icon: "✉", label: "Submit Inquiry", target: Screen::Inquiry },
];

/// Messages emitted by the menu screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Open(Screen),
}

/// Render the menu grid.
pub fn view(large_text: bool) -> Element<'static, Message> {
    let title = text("Main Menu")
        .size(typography::scaled(typography::TITLE_LG, large_text));

    let top_row = MENU_ITEMS[..3]
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, item| {
            row.push(tile(item, large_text))
        });
    let bottom_row = MENU_ITEMS[3..]
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, item| {
            row.push(tile(item, large_text))
        });

    let grid = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(top_row)
        .push(bottom_row);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn tile(item: &MenuItem, large_text: bool) -> Element<'static, Message> {
    let face = button(
        container(text(item.icon).size(typography::TITLE_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(sizing::MENU_TILE)
    .height(sizing::MENU_TILE)
    .style(styles::button::menu_tile)
    .on_press(Message::Open(item.target));

    let label = text(item.label).size(typography::scaled(typography::BODY, large_text));

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(sizing::MENU_TILE + spacing::LG)
        .push(face)
        .push(label)
        .into()
}
