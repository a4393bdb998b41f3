//! Spreadsheet endpoint client
//!
//! Appends waitlist sign-ups to the collection sheet over `fetch`.

use gloo_net::http::Request;
use lib_core::{WaitlistClient, WaitlistError};
use shared::dto::waitlist::SheetAppend;

/// Client for the spreadsheet append endpoint.
#[derive(Clone, Debug)]
pub struct SheetsClient {
    endpoint: String,
}

impl SheetsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl WaitlistClient for SheetsClient {
    async fn append_email(&self, email: &str) -> lib_core::Result<()> {
        // `json` sets Content-Type: application/json
        let request = Request::post(&self.endpoint)
            .json(&SheetAppend::single(email))
            .map_err(|e| WaitlistError::Transport(format!("Failed to encode request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| WaitlistError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
        Err(WaitlistError::Rejected { status, body })
    }
}
