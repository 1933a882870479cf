// SPDX-License-Identifier: MPL-2.0
//! Inquiry form: name, email, and concern, submitted to the helpdesk with
//! the local outbox as fallback.

use crate::error::InquiryError;
use crate::inquiry::{Inquiry, TicketId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, scrollable, text, text_input, Column, Container},
    Element, Length,
};

/// Where the last submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Sending,
    /// Accepted, remotely or into the local outbox.
    Success { id: TicketId, queued: bool },
    Error(String),
}

/// Inquiry form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub concern: String,
    pub status: Status,
    /// The inquiry currently in flight, kept so a remote failure can be
    /// queued with exactly what was sent.
    pending: Option<Inquiry>,
}

impl State {
    /// Fresh form pre-filled with the visitor's name from login.
    pub fn with_visitor_name(name: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    fn as_inquiry(&self) -> Inquiry {
        Inquiry {
            name: self.name.clone(),
            email: self.email.clone(),
            concern: self.concern.clone(),
        }
        .trimmed()
    }

    /// Take the in-flight inquiry after a remote failure, for queueing.
    pub fn take_pending(&mut self) -> Option<Inquiry> {
        self.pending.take()
    }

    /// Record the final outcome of a submission attempt.
    pub fn finish(&mut self, outcome: Result<TicketId, InquiryError>) {
        match outcome {
            Ok(id) => {
                self.pending = None;
                self.status = Status::Success { id, queued: false };
                self.email.clear();
                self.concern.clear();
            }
            Err(err) => self.status = Status::Error(err.status_line()),
        }
    }

    /// Mark the pending inquiry as queued locally under `id`.
    pub fn mark_queued(&mut self, id: TicketId) {
        self.status = Status::Success { id, queued: true };
        self.email.clear();
        self.concern.clear();
    }
}

/// Messages emitted by the inquiry form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    ConcernChanged(String),
    Submit,
}

/// What the parent must act on after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A validated inquiry ready to send to the helpdesk.
    Submit(Inquiry),
}

/// Process an inquiry form message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => state.name = value,
        Message::EmailChanged(value) => state.email = value,
        Message::ConcernChanged(value) => state.concern = value,
        Message::Submit => {
            if state.status == Status::Sending {
                return Event::None;
            }
            let inquiry = state.as_inquiry();
            match inquiry.validate() {
                Ok(()) => {
                    state.status = Status::Sending;
                    state.pending = Some(inquiry.clone());
                    return Event::Submit(inquiry);
                }
                Err(err) => state.status = Status::Error(err.status_line()),
            }
        }
    }
    Event::None
}

/// Render the inquiry form body.
pub fn view(state: &State, large_text: bool) -> Element<'_, Message> {
    let field_size = typography::scaled(typography::BODY_LG, large_text);

    let name = text_input("Your name", &state.name)
        .on_input(Message::NameChanged)
        .size(field_size)
        .padding(spacing::SM);
    let email = text_input("Email address", &state.email)
        .on_input(Message::EmailChanged)
        .size(field_size)
        .padding(spacing::SM);
    let concern = text_input("How can we help?", &state.concern)
        .on_input(Message::ConcernChanged)
        .size(field_size)
        .padding(spacing::SM);

    let sending = state.status == Status::Sending;
    let mut submit = button(
        container(
            text(if sending { "Sending..." } else { "Submit Inquiry" })
                .size(typography::BODY_LG),
        )
        .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::primary);
    if !sending {
        submit = submit.on_press(Message::Submit);
    }

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(name)
        .push(email)
        .push(concern)
        .push(submit);

    if let Some(line) = status_line(&state.status, large_text) {
        form = form.push(line);
    }

    let card = Container::new(form)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card);

    Container::new(
        scrollable(
            Column::new()
                .padding(spacing::MD)
                .align_x(Horizontal::Center)
                .push(card),
        )
        .height(Length::Fill),
    )
    .into()
}

fn status_line(status: &Status, large_text: bool) -> Option<Element<'static, Message>> {
    let size = typography::scaled(typography::BODY, large_text);
    match status {
        Status::Idle | Status::Sending => None,
        Status::Success { id, queued } => {
            let line = if *queued {
                format!("Saved on this kiosk as {id}. It will be synced to the helpdesk.")
            } else {
                format!("Inquiry submitted. Your ticket number is {id}.")
            };
            Some(text(line).size(size).color(palette::SUCCESS_500).into())
        }
        Status::Error(line) => Some(
            text(line.clone())
                .size(size)
                .color(palette::ERROR_500)
                .into(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> State {
        State {
            name: "Juana Dela Cruz".to_string(),
            email: "juana@plv.edu.ph".to_string(),
            concern: "Lost my enrollment receipt".to_string(),
            ..State::default()
        }
    }

    #[test]
    fn submit_with_valid_fields_emits_the_inquiry() {
        let mut state = filled_form();
        let event = update(&mut state, Message::Submit);
        match event {
            Event::Submit(inquiry) => assert_eq!(inquiry.email, "juana@plv.edu.ph"),
            other => panic!("expected Submit, got {other:?}"),
        }
        assert_eq!(state.status, Status::Sending);
        assert!(state.pending.is_some());
    }

    #[test]
    fn submit_with_blank_concern_shows_a_validation_error() {
        let mut state = filled_form();
        state.concern.clear();
        let event = update(&mut state, Message::Submit);
        assert_eq!(event, Event::None);
        assert!(matches!(state.status, Status::Error(_)));
        assert!(state.pending.is_none());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut state = filled_form();
        update(&mut state, Message::Submit);
        let event = update(&mut state, Message::Submit);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn remote_success_clears_the_form_but_keeps_the_name() {
        let mut state = filled_form();
        update(&mut state, Message::Submit);
        state.finish(Ok(TicketId("TKT-123456".to_string())));

        assert!(matches!(state.status, Status::Success { queued: false, .. }));
        assert_eq!(state.name, "Juana Dela Cruz");
        assert!(state.email.is_empty());
        assert!(state.concern.is_empty());
        assert!(state.pending.is_none());
    }

    #[test]
    fn remote_failure_keeps_the_pending_inquiry_for_queueing() {
        let mut state = filled_form();
        update(&mut state, Message::Submit);
        state.finish(Err(InquiryError::Unreachable("refused".to_string())));

        assert!(matches!(state.status, Status::Error(_)));
        let pending = state.take_pending().expect("pending inquiry dropped");
        assert_eq!(pending.name, "Juana Dela Cruz");
    }

    #[test]
    fn mark_queued_reports_the_local_ticket() {
        let mut state = filled_form();
        update(&mut state, Message::Submit);
        state.mark_queued(TicketId("TKT-654321".to_string()));
        assert!(matches!(state.status, Status::Success { queued: true, .. }));
    }

    #[test]
    fn visitor_name_prefills_the_form() {
        let state = State::with_visitor_name(Some("Juana"));
        assert_eq!(state.name, "Juana");

        let guest = State::with_visitor_name(None);
        assert!(guest.name.is_empty());
    }
}
