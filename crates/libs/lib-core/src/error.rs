//! # Waitlist Error Handling
//!
//! [`WaitlistError`] covers every way a waitlist submission can end without a sign-up.
//! None of them are fatal: the visitor stays on the form and may try again.
//!
//! ## Error Categories
//!
//! 1. **Visitor errors** - caught before any network call
//!    - [`InvalidEmail`](WaitlistError::InvalidEmail)
//!
//! 2. **Collaborator errors** - the spreadsheet endpoint call did not succeed
//!    - [`Rejected`](WaitlistError::Rejected) - non-2xx response
//!    - [`Transport`](WaitlistError::Transport) - the request never completed
//!
//! 3. **Ignored submits** - no message, state untouched
//!    - [`InFlight`](WaitlistError::InFlight)
//!    - [`AlreadySubmitted`](WaitlistError::AlreadySubmitted)
//!
//! The `Display` output carries diagnostic detail for the console log.
//! [`WaitlistError::user_message`] is the only text ever rendered on the page.

use thiserror::Error;

/// Convenience type alias for `Result<T, WaitlistError>`.
pub type Result<T> = std::result::Result<T, WaitlistError>;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const REJECTED_MESSAGE: &str = "Submission failed. Please try again.";
pub const TRANSPORT_MESSAGE: &str = "Something went wrong. Try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// Input does not have the `local@domain.tld` shape.
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// Endpoint answered with a non-success status.
    #[error("Submission rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Network unreachable, DNS failure, CORS refusal and similar.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A submission is already waiting on the endpoint.
    #[error("Submission already in flight")]
    InFlight,

    /// The session already signed up.
    #[error("Already submitted")]
    AlreadySubmitted,
}

impl WaitlistError {
    /// Text shown under the email field, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            WaitlistError::InvalidEmail(_) => Some(INVALID_EMAIL_MESSAGE),
            WaitlistError::Rejected { .. } => Some(REJECTED_MESSAGE),
            WaitlistError::Transport(_) => Some(TRANSPORT_MESSAGE),
            WaitlistError::InFlight | WaitlistError::AlreadySubmitted => None,
        }
    }

    /// Whether the submit was dropped without touching visible state.
    pub fn is_ignored(&self) -> bool {
        self.user_message().is_none()
    }
}
