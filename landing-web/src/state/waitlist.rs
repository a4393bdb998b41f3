//! Waitlist state management

use leptos::prelude::*;
use lib_core::{WaitlistState, WaitlistStore};

use crate::services::SheetsClient;
use crate::utils::constants::WAITLIST_ENDPOINT;

/// Page-wide waitlist context, shared by every form on the page
#[derive(Clone, Copy)]
pub struct WaitlistContext {
    pub form: RwSignal<WaitlistState>,
}

impl WaitlistContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(WaitlistState::new()),
        }
    }

    pub fn email(&self) -> String {
        self.form.with(|state| state.email().to_string())
    }

    pub fn set_email(&self, email: String) {
        self.form.update(|state| state.set_email(email));
    }

    pub fn is_submitted(&self) -> bool {
        self.form.with(|state| state.is_submitted())
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|state| state.is_submitting())
    }

    pub fn error_message(&self) -> Option<String> {
        self.form.with(|state| state.error_message().map(str::to_string))
    }

    /// Kick off one submission against the configured endpoint.
    pub fn submit(&self) {
        let context = *self;
        leptos::task::spawn_local(async move {
            let client = SheetsClient::new(WAITLIST_ENDPOINT);
            lib_core::submit(&context, &client).await;
        });
    }
}

impl Default for WaitlistContext {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistStore for WaitlistContext {
    fn apply<R>(&self, f: impl FnOnce(&mut WaitlistState) -> R) -> Option<R> {
        // Disposed once the page owner is cleaned up
        self.form.try_update(f)
    }
}

pub fn provide_waitlist_context() -> WaitlistContext {
    let context = WaitlistContext::new();
    provide_context(context);
    context
}

pub fn use_waitlist_context() -> WaitlistContext {
    expect_context::<WaitlistContext>()
}
