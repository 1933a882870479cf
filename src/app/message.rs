// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::InquiryError;
use crate::inquiry::TicketId;
use crate::ui::{directory, faqs, header, home, inquiry, login, menu, not_found, sidebar};

/// Launch options parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Route path to start on, e.g. `/menu`. Unknown paths open NotFound.
    pub screen: Option<String>,
    /// Override for the persisted-state directory.
    pub data_dir: Option<String>,
    /// Override for the `settings.toml` directory.
    pub config_dir: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Login(login::Message),
    Menu(menu::Message),
    Faqs(faqs::Message),
    Directory(directory::Message),
    Announcements(crate::ui::announcements::Message),
    Calendar(crate::ui::calendar::Message),
    Inquiry(inquiry::Message),
    NotFound(not_found::Message),
    Header(header::Message),
    Sidebar(sidebar::Message),
    /// Result of an inquiry submission attempt against the helpdesk.
    InquirySubmitted(Result<TicketId, InquiryError>),
}
