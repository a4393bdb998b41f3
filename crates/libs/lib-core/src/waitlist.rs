//! # Waitlist Submission
//!
//! State behind the waitlist form and the driver for one submission attempt.
//!
//! ## Flow
//!
//! ```text
//! Idle ──submit──► clear error ──invalid──► Idle (error shown, no request)
//!                       │
//!                     valid
//!                       ▼
//!                  Submitting ──2xx──────► Submitted (terminal, email cleared)
//!                       │
//!                       ├──non-2xx──► Idle ("Submission failed. Please try again.")
//!                       └──transport─► Idle ("Something went wrong. Try again later.")
//! ```
//!
//! `is_submitting` drops back to `false` on every settlement path.
//!
//! ## Seams
//!
//! - [`WaitlistStore`] owns the live [`WaitlistState`]. In the browser it is a reactive
//!   signal shared by both forms on the page, so a sign-up through either form hides both.
//! - [`WaitlistClient`] performs the append call against the spreadsheet endpoint.

use crate::error::{Result, WaitlistError};
use crate::validation::validate_email;

/// Form state for one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistState {
    email: String,
    submitted: bool,
    error_msg: Option<String>,
    is_submitting: bool,
}

impl WaitlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Mirror the input field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    /// Start an attempt.
    ///
    /// Clears the previous error, validates the current email and, if it passes, flips
    /// `is_submitting` and hands back the address to send. A submit while a request is
    /// in flight, or after the session already signed up, leaves the state untouched.
    pub fn begin_submit(&mut self) -> Result<String> {
        if self.submitted {
            return Err(WaitlistError::AlreadySubmitted);
        }
        if self.is_submitting {
            return Err(WaitlistError::InFlight);
        }

        self.error_msg = None;

        if let Err(err) = validate_email(&self.email) {
            self.error_msg = err.user_message().map(str::to_string);
            return Err(err);
        }

        self.is_submitting = true;
        Ok(self.email.clone())
    }

    /// Apply the outcome of the append call started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, outcome: Result<()>) -> Result<()> {
        self.is_submitting = false;
        match &outcome {
            Ok(()) => {
                self.submitted = true;
                self.email.clear();
                self.error_msg = None;
            }
            Err(err) => {
                if let Some(message) = err.user_message() {
                    self.error_msg = Some(message.to_string());
                }
            }
        }
        outcome
    }
}

/// Owner of the live form state.
pub trait WaitlistStore {
    /// Run `f` against the current state.
    ///
    /// Returns `None` once the owner has been torn down; nothing is mutated then.
    fn apply<R>(&self, f: impl FnOnce(&mut WaitlistState) -> R) -> Option<R>;
}

/// Sends a sign-up to the collection endpoint.
#[allow(async_fn_in_trait)]
pub trait WaitlistClient {
    /// Append `email` as a single-cell row.
    ///
    /// Any 2xx is `Ok`. Other statuses map to [`WaitlistError::Rejected`] and
    /// failures to reach the endpoint map to [`WaitlistError::Transport`].
    async fn append_email(&self, email: &str) -> Result<()>;
}

/// Drive one submission attempt from button press to settled state.
///
/// Returns `None` when the store was torn down before the attempt settled; the
/// outcome is then logged and dropped.
pub async fn submit<S, C>(store: &S, client: &C) -> Option<Result<()>>
where
    S: WaitlistStore,
    C: WaitlistClient,
{
    let email = match store.apply(WaitlistState::begin_submit)? {
        Ok(email) => email,
        Err(err) if err.is_ignored() => {
            log::debug!("Waitlist submit ignored: {}", err);
            return Some(Err(err));
        }
        Err(err) => {
            log::info!("Waitlist submit blocked: {}", err);
            return Some(Err(err));
        }
    };

    log::info!("Submitting waitlist sign-up");
    let outcome = client.append_email(&email).await;
    match &outcome {
        Ok(()) => log::info!("Waitlist sign-up accepted"),
        Err(err) => log::error!("Failed to submit: {}", err),
    }

    let settled = store.apply(|state| state.finish_submit(outcome));
    if settled.is_none() {
        log::warn!("Waitlist form torn down before the submission settled; outcome dropped");
    }
    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct TestStore {
        state: RefCell<WaitlistState>,
        torn_down: Cell<bool>,
    }

    impl TestStore {
        fn with_email(email: &str) -> Rc<Self> {
            let store = Rc::new(Self::default());
            store.state.borrow_mut().set_email(email);
            store
        }

        fn snapshot(&self) -> WaitlistState {
            self.state.borrow().clone()
        }
    }

    impl WaitlistStore for Rc<TestStore> {
        fn apply<R>(&self, f: impl FnOnce(&mut WaitlistState) -> R) -> Option<R> {
            if self.torn_down.get() {
                return None;
            }
            Some(f(&mut self.state.borrow_mut()))
        }
    }

    /// Endpoint stand-in that records calls and what the form looked like mid-flight.
    struct MockClient {
        store: Rc<TestStore>,
        response: Result<()>,
        calls: RefCell<Vec<String>>,
        submitting_during_call: Cell<Option<bool>>,
        tear_down_during_call: bool,
    }

    impl MockClient {
        fn new(store: &Rc<TestStore>, response: Result<()>) -> Self {
            Self {
                store: Rc::clone(store),
                response,
                calls: RefCell::new(Vec::new()),
                submitting_during_call: Cell::new(None),
                tear_down_during_call: false,
            }
        }
    }

    impl WaitlistClient for MockClient {
        async fn append_email(&self, email: &str) -> Result<()> {
            self.calls.borrow_mut().push(email.to_string());
            self.submitting_during_call
                .set(Some(self.store.state.borrow().is_submitting()));
            if self.tear_down_during_call {
                self.store.torn_down.set(true);
            }
            self.response.clone()
        }
    }

    fn rejected() -> WaitlistError {
        WaitlistError::Rejected { status: 500, body: "internal".into() }
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_request() {
        for email in ["", "fan", "fan@example", "fan @example.com", "fan@exa mple.com"] {
            let store = TestStore::with_email(email);
            let client = MockClient::new(&store, Ok(()));

            let outcome = submit(&store, &client).await;

            assert!(matches!(outcome, Some(Err(WaitlistError::InvalidEmail(_)))));
            assert!(client.calls.borrow().is_empty(), "{email:?} reached the network");
            let state = store.snapshot();
            assert_eq!(state.error_message(), Some("Please enter a valid email address."));
            assert!(!state.is_submitting());
            assert_eq!(state.email(), email);
        }
    }

    #[tokio::test]
    async fn test_success_marks_submitted_and_clears_email() {
        let store = TestStore::with_email("fan@example.com");
        let client = MockClient::new(&store, Ok(()));

        let outcome = submit(&store, &client).await;

        assert_eq!(outcome, Some(Ok(())));
        assert_eq!(*client.calls.borrow(), vec!["fan@example.com".to_string()]);
        assert_eq!(client.submitting_during_call.get(), Some(true));
        let state = store.snapshot();
        assert!(state.is_submitted());
        assert_eq!(state.email(), "");
        assert_eq!(state.error_message(), None);
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn test_rejection_keeps_email() {
        let store = TestStore::with_email("fan@example.com");
        let client = MockClient::new(&store, Err(rejected()));

        let outcome = submit(&store, &client).await;

        assert_eq!(outcome, Some(Err(rejected())));
        assert_eq!(client.submitting_during_call.get(), Some(true));
        let state = store.snapshot();
        assert!(!state.is_submitted());
        assert_eq!(state.error_message(), Some("Submission failed. Please try again."));
        assert_eq!(state.email(), "fan@example.com");
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn test_transport_failure_message() {
        let store = TestStore::with_email("fan@example.com");
        let client = MockClient::new(&store, Err(WaitlistError::Transport("connection refused".into())));

        submit(&store, &client).await;

        assert_eq!(client.submitting_during_call.get(), Some(true));
        let state = store.snapshot();
        assert!(!state.is_submitted());
        assert_eq!(state.error_message(), Some("Something went wrong. Try again later."));
        assert_eq!(state.email(), "fan@example.com");
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let store = TestStore::with_email("fan@example.com");
        submit(&store, &MockClient::new(&store, Err(rejected()))).await;
        assert!(store.snapshot().error_message().is_some());

        submit(&store, &MockClient::new(&store, Ok(()))).await;

        let state = store.snapshot();
        assert!(state.is_submitted());
        assert_eq!(state.error_message(), None);
    }

    #[tokio::test]
    async fn test_submit_after_success_is_ignored() {
        let store = TestStore::with_email("fan@example.com");
        submit(&store, &MockClient::new(&store, Ok(()))).await;
        store.state.borrow_mut().set_email("fan@example.com");

        let again = MockClient::new(&store, Ok(()));
        let outcome = submit(&store, &again).await;

        assert_eq!(outcome, Some(Err(WaitlistError::AlreadySubmitted)));
        assert!(again.calls.borrow().is_empty());
        assert!(store.snapshot().is_submitted());
    }

    #[test]
    fn test_double_submit_while_in_flight() {
        let mut state = WaitlistState::new();
        state.set_email("fan@example.com");
        assert_eq!(state.begin_submit(), Ok("fan@example.com".to_string()));

        assert_eq!(state.begin_submit(), Err(WaitlistError::InFlight));
        assert!(state.is_submitting());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = WaitlistState::new();
        state.set_email("nope");
        let _ = state.begin_submit();
        assert!(state.error_message().is_some());

        state.set_email("fan@example.com");
        assert!(state.begin_submit().is_ok());
        assert_eq!(state.error_message(), None);
    }

    #[tokio::test]
    async fn test_teardown_mid_flight_drops_outcome() {
        let store = TestStore::with_email("fan@example.com");
        let mut client = MockClient::new(&store, Ok(()));
        client.tear_down_during_call = true;

        let outcome = submit(&store, &client).await;

        assert_eq!(outcome, None);
        assert_eq!(client.calls.borrow().len(), 1);
        let state = store.snapshot();
        assert!(!state.is_submitted());
        assert!(state.is_submitting());
    }

    #[tokio::test]
    async fn test_torn_down_store_sends_nothing() {
        let store = TestStore::with_email("fan@example.com");
        store.torn_down.set(true);
        let client = MockClient::new(&store, Ok(()));

        assert_eq!(submit(&store, &client).await, None);
        assert!(client.calls.borrow().is_empty());
    }
}
