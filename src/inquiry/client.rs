// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote helpdesk service.
//!
//! One attempt, short timeout, no retries: the surrounding form falls back
//! to the local outbox on any failure, so the only job here is to translate
//! transport outcomes into [`InquiryError`] values.

use crate::config::INQUIRY_TIMEOUT_SECS;
use crate::error::InquiryError;
use crate::inquiry::{Inquiry, TicketId};
use serde::Deserialize;
use std::time::Duration;

/// Response body the helpdesk returns for a created inquiry.
#[derive(Debug, Deserialize)]
struct CreatedInquiry {
    id: String,
}

/// Posts the inquiry to the helpdesk and returns the created ticket id.
///
/// Runs inside a `Task::perform` future on the iced runtime; the caller
/// receives the result as a message and never blocks the UI.
pub async fn submit(endpoint: String, inquiry: Inquiry) -> Result<TicketId, InquiryError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(INQUIRY_TIMEOUT_SECS))
        .build()
        .map_err(|e| InquiryError::Unreachable(e.to_string()))?;

    let response = client
        .post(&endpoint)
        .json(&inquiry)
        .send()
        .await
        .map_err(|e| InquiryError::Unreachable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InquiryError::Rejected(status.as_u16()));
    }

    let created: CreatedInquiry = response
        .json()
        .await
        .map_err(|e| InquiryError::MalformedResponse(e.to_string()))?;

    Ok(TicketId(created.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_unreachable_error() {
        // Port 9 (discard) is not listening on loopback in any sane setup.
        let inquiry = Inquiry {
            name: "Juana".to_string(),
            email: "juana@plv.edu.ph".to_string(),
            concern: "Testing offline behavior".to_string(),
        };
        let result = submit("http://127.0.0.1:9/api/inquiries".to_string(), inquiry).await;
        assert!(matches!(result, Err(InquiryError::Unreachable(_))));
    }
}
