// SPDX-License-Identifier: MPL-2.0
//! Local outbox for inquiries that could not reach the helpdesk.
//!
//! Queued tickets live inside the persisted kiosk state file and are tagged
//! for later sync by whatever maintenance process services the kiosk. The
//! outbox never drops a ticket on its own.

use crate::inquiry::{Inquiry, TicketId};
use serde::{Deserialize, Serialize};

/// A ticket waiting on this kiosk for the helpdesk to become reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedTicket {
    pub id: TicketId,
    pub inquiry: Inquiry,
    /// RFC 3339 creation time, recorded for the sync process.
    pub queued_at: String,
}

impl QueuedTicket {
    /// Queues an inquiry under a locally generated ticket id.
    pub fn new(inquiry: Inquiry) -> Self {
        Self {
            id: TicketId::generate(),
            inquiry,
            queued_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_ticket_records_id_and_timestamp() {
        let inquiry = Inquiry {
            name: "Juana".to_string(),
            email: "juana@plv.edu.ph".to_string(),
            concern: "TOR request status".to_string(),
        };
        let ticket = QueuedTicket::new(inquiry.clone());

        assert!(ticket.id.0.starts_with("TKT-"));
        assert_eq!(ticket.inquiry, inquiry);
        assert!(ticket.queued_at.contains('T')); // RFC 3339 shape
    }
}
