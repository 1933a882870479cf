// SPDX-License-Identifier: MPL-2.0
//! FAQs page: searchable accordion of question/answer cards.

use crate::content::faq::{self, FaqEntry};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, container, scrollable, text, text_input, Column, Container, Row},
    Element, Length,
};

/// FAQs page state: the search term and which entry is expanded.
///
/// At most one entry is open at a time, matching the original accordion.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub search: String,
    expanded: Option<usize>,
}

impl State {
    /// Check if the entry at `index` (into the filtered list) is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle an entry, collapsing whichever was open before.
    pub fn toggle(&mut self, index: usize) {
        if self.expanded == Some(index) {
            self.expanded = None;
        } else {
            self.expanded = Some(index);
        }
    }
}

/// Messages emitted by the FAQs page.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    Toggle(usize),
}

/// Process a FAQs message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::SearchChanged(term) => {
            state.search = term;
            // Indices into the filtered list shift with the term, so any
            // open entry would point at the wrong card.
            state.expanded = None;
        }
        Message::Toggle(index) => state.toggle(index),
    }
}

/// Render the FAQs page body (the header is added by the parent).
pub fn view(state: &State, large_text: bool) -> Element<'_, Message> {
    let search = text_input("Search FAQs...", &state.search)
        .on_input(Message::SearchChanged)
        .size(typography::scaled(typography::BODY_LG, large_text))
        .padding(spacing::SM);

    let matches = faq::filter(&state.search);

    let mut list = Column::new().spacing(spacing::SM);
    if matches.is_empty() {
        list = list.push(
            container(
                text("No FAQs found matching your search.")
                    .size(typography::scaled(typography::BODY, large_text)),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(spacing::XL),
        );
    } else {
        for (index, entry) in matches.iter().enumerate() {
            list = list.push(card(entry, index, state.is_expanded(index), large_text));
        }
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(search)
        .push(scrollable(list).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card<'a>(
    entry: &FaqEntry,
    index: usize,
    expanded: bool,
    large_text: bool,
) -> Element<'a, Message> {
    let chevron = if expanded { "▲" } else { "▼" };
    let question_row = Row::new()
        .spacing(spacing::SM)
        .push(
            text(entry.question)
                .size(typography::scaled(typography::BODY, large_text))
                .width(Length::Fill),
        )
        .push(text(chevron).size(typography::CAPTION));

    let mut body = Column::new().spacing(spacing::SM).push(
        button(question_row)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::header_icon)
            .on_press(Message::Toggle(index)),
    );

    if expanded {
        body = body.push(
            container(
                text(entry.answer).size(typography::scaled(typography::BODY, large_text)),
            )
            .padding([0.0, spacing::SM]),
        );
    }

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::accent_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes_an_entry() {
        let mut state = State::default();
        update(&mut state, Message::Toggle(2));
        assert!(state.is_expanded(2));

        update(&mut state, Message::Toggle(2));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn opening_one_entry_closes_the_other() {
        let mut state = State::default();
        update(&mut state, Message::Toggle(0));
        update(&mut state, Message::Toggle(3));
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(3));
    }

    #[test]
    fn changing_the_search_collapses_the_open_entry() {
        let mut state = State::default();
        update(&mut state, Message::Toggle(1));
        update(&mut state, Message::SearchChanged("library".to_string()));
        assert_eq!(state.search, "library");
        assert!(!state.is_expanded(1));
    }
}
