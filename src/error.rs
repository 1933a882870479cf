// SPDX-License-Identifier: MPL-2.0
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Inquiry(InquiryError),
}

/// Specific error types for inquiry submission.
///
/// Nothing here is fatal: every variant degrades to the local outbox, and
/// the message is only ever shown as a transient status line on the form.
#[derive(Debug, Clone)]
pub enum InquiryError {
    /// A required field is blank or the email has no `@`.
    InvalidField(&'static str),

    /// The helpdesk endpoint could not be reached (offline kiosk).
    Unreachable(String),

    /// The helpdesk answered with a non-success status.
    Rejected(u16),

    /// The helpdesk answered but the response body was not understood.
    MalformedResponse(String),
}

impl InquiryError {
    /// Short status line shown beneath the submit button.
    pub fn status_line(&self) -> String {
        match self {
            InquiryError::InvalidField(field) => {
                format!("Please fill in your {field} before submitting.")
            }
            InquiryError::Unreachable(_) => {
                "Helpdesk unreachable. Your inquiry was saved on this kiosk.".to_string()
            }
            InquiryError::Rejected(status) => {
                format!("Helpdesk refused the inquiry (HTTP {status}). Saved on this kiosk.")
            }
            InquiryError::MalformedResponse(_) => {
                "Unexpected helpdesk reply. Your inquiry was saved on this kiosk.".to_string()
            }
        }
    }

    /// Whether the failed ticket should be queued in the local outbox.
    ///
    /// Validation failures stay in the form for the user to fix; everything
    /// else is a remote-side problem worth keeping the ticket for.
    pub fn should_queue(&self) -> bool {
        !matches!(self, InquiryError::InvalidField(_))
    }
}

impl fmt::Display for InquiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InquiryError::InvalidField(field) => write!(f, "invalid field: {field}"),
            InquiryError::Unreachable(msg) => write!(f, "helpdesk unreachable: {msg}"),
            InquiryError::Rejected(status) => write!(f, "helpdesk rejected inquiry: HTTP {status}"),
            InquiryError::MalformedResponse(msg) => {
                write!(f, "malformed helpdesk response: {msg}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Inquiry(err) => write!(f, "inquiry error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<InquiryError> for Error {
    fn from(err: InquiryError) -> Self {
        Error::Inquiry(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_queued() {
        assert!(!InquiryError::InvalidField("email").should_queue());
        assert!(InquiryError::Unreachable("timeout".into()).should_queue());
        assert!(InquiryError::Rejected(500).should_queue());
    }

    #[test]
    fn status_lines_mention_local_fallback_for_remote_failures() {
        let line = InquiryError::Unreachable("refused".into()).status_line();
        assert!(line.contains("saved on this kiosk"));
    }

    #[test]
    fn io_error_converts_into_crate_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
