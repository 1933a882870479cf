// SPDX-License-Identifier: MPL-2.0
//! Inquiry submission: payload validation, ticket ids, the remote helpdesk
//! client, and the local outbox fallback.
//!
//! The kiosk is frequently deployed on a network segment with no route to
//! the helpdesk, so submission is best-effort: a failed remote attempt
//! queues the ticket locally tagged for later sync and the visitor still
//! gets a ticket id.

pub mod client;
pub mod outbox;

use crate::error::InquiryError;
use serde::{Deserialize, Serialize};

/// An inquiry as entered into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub concern: String,
}

impl Inquiry {
    /// Validates the form fields.
    ///
    /// Blank fields and emails without `@` are rejected; everything else is
    /// accepted as-is since the helpdesk does its own triage.
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.trim().is_empty() {
            return Err(InquiryError::InvalidField("name"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(InquiryError::InvalidField("email address"));
        }
        if self.concern.trim().is_empty() {
            return Err(InquiryError::InvalidField("concern"));
        }
        Ok(())
    }

    /// Returns a copy with whitespace trimmed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            concern: self.concern.trim().to_string(),
        }
    }
}

/// Identifier handed to the visitor, `TKT-` plus six digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketId(pub String);

impl TicketId {
    /// Generates a local ticket id from the last six digits of the unix
    /// millisecond timestamp, matching the helpdesk's own scheme so locally
    /// queued tickets look the same to the visitor.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self::from_millis(millis)
    }

    fn from_millis(millis: i64) -> Self {
        let digits = format!("{:06}", millis.unsigned_abs());
        let tail = &digits[digits.len() - 6..];
        Self(format!("TKT-{tail}"))
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inquiry() -> Inquiry {
        Inquiry {
            name: "Juana Dela Cruz".to_string(),
            email: "juana@plv.edu.ph".to_string(),
            concern: "Lost my enrollment receipt".to_string(),
        }
    }

    #[test]
    fn valid_inquiry_passes_validation() {
        assert!(valid_inquiry().validate().is_ok());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut inquiry = valid_inquiry();
        inquiry.name = "   ".to_string();
        assert!(matches!(
            inquiry.validate(),
            Err(InquiryError::InvalidField("name"))
        ));

        let mut inquiry = valid_inquiry();
        inquiry.concern = String::new();
        assert!(matches!(
            inquiry.validate(),
            Err(InquiryError::InvalidField("concern"))
        ));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut inquiry = valid_inquiry();
        inquiry.email = "juana.plv.edu.ph".to_string();
        assert!(matches!(
            inquiry.validate(),
            Err(InquiryError::InvalidField("email address"))
        ));
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let inquiry = Inquiry {
            name: "  Juana ".to_string(),
            email: " juana@plv.edu.ph ".to_string(),
            concern: " help \n".to_string(),
        };
        let trimmed = inquiry.trimmed();
        assert_eq!(trimmed.name, "Juana");
        assert_eq!(trimmed.email, "juana@plv.edu.ph");
        assert_eq!(trimmed.concern, "help");
    }

    #[test]
    fn ticket_ids_use_the_tkt_prefix_and_six_digits() {
        let id = TicketId::from_millis(1_735_689_600_123);
        assert_eq!(id.0, "TKT-600123");

        let id = TicketId::generate();
        assert!(id.0.starts_with("TKT-"));
        assert_eq!(id.0.len(), "TKT-".len() + 6);
    }
}
