// SPDX-License-Identifier: MPL-2.0
//! Update loop for the application.
//!
//! Component messages are forwarded into the owning screen's `update`;
//! the returned events are where app-level side effects (navigation,
//! persistence, the helpdesk call) happen.

use super::{App, Message, Screen};
use crate::inquiry::{client, outbox::QueuedTicket};
use crate::ui::{directory, faqs, header, home, inquiry, login, menu, not_found, sidebar};
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(home::Message::Explore) => {
                self.screen = Screen::Login;
            }

            Message::Login(message) => {
                if let login::Event::LoggedIn(name) = login::update(&mut self.login, message) {
                    self.kiosk_state.visitor_name = name;
                    self.persist_state();
                    self.inquiry_form = inquiry::State::with_visitor_name(
                        self.kiosk_state.visitor_name.as_deref(),
                    );
                    self.screen = Screen::Menu;
                }
            }

            Message::Menu(menu::Message::Open(screen)) => {
                self.screen = screen;
            }

            Message::Faqs(message) => faqs::update(&mut self.faqs, message),

            Message::Directory(message) => directory::update(&mut self.directory, message),

            Message::Announcements(message) => match message {},
            Message::Calendar(message) => match message {},

            Message::Inquiry(message) => {
                if let inquiry::Event::Submit(payload) =
                    inquiry::update(&mut self.inquiry_form, message)
                {
                    let endpoint = self.config.inquiry_endpoint().to_string();
                    return Task::perform(
                        client::submit(endpoint, payload),
                        Message::InquirySubmitted,
                    );
                }
            }

            Message::InquirySubmitted(outcome) => self.finish_inquiry(outcome),

            Message::NotFound(not_found::Message::BackToMenu) => {
                self.screen = Screen::Menu;
            }

            Message::Header(header::Message::Back) => {
                self.screen = Screen::Menu;
            }
            Message::Header(header::Message::OpenSidebar) => {
                self.sidebar_open = true;
            }

            Message::Sidebar(message) => self.handle_sidebar(message),
        }

        Task::none()
    }

    fn handle_sidebar(&mut self, message: sidebar::Message) {
        match sidebar::update(&mut self.sidebar_open, message) {
            sidebar::Event::None => {}
            sidebar::Event::GoHome => self.screen = Screen::Menu,
            sidebar::Event::SetHighContrast(value) => {
                self.kiosk_state.accessibility.high_contrast = value;
                self.persist_state();
            }
            sidebar::Event::SetLargeText(value) => {
                self.kiosk_state.accessibility.large_text = value;
                self.persist_state();
            }
            sidebar::Event::Exit => {
                // Logout: forget the visitor and return to the welcome
                // screen ready for the next person.
                self.kiosk_state.visitor_name = None;
                self.persist_state();
                self.login = login::State::default();
                self.inquiry_form = inquiry::State::default();
                self.directory = directory::State::default();
                self.screen = Screen::Home;
            }
        }
    }

    fn finish_inquiry(&mut self, outcome: Result<crate::inquiry::TicketId, crate::error::InquiryError>) {
        match outcome {
            Ok(id) => self.inquiry_form.finish(Ok(id)),
            Err(err) => {
                let queue = err.should_queue();
                self.inquiry_form.finish(Err(err));
                if queue {
                    if let Some(pending) = self.inquiry_form.take_pending() {
                        let ticket = QueuedTicket::new(pending);
                        self.inquiry_form.mark_queued(ticket.id.clone());
                        self.kiosk_state.outbox.push(ticket);
                        self.persist_state();
                    }
                }
            }
        }
    }
}
