//! Layout shell
//!
//! Provides the shared waitlist state and wraps the landing page in the page frame.

use leptos::prelude::*;

use crate::pages::LandingPage;
use crate::state::waitlist::provide_waitlist_context;

#[component]
pub fn App() -> impl IntoView {
    // One store backs both forms on the page
    provide_waitlist_context();

    view! {
        <main class="page">
            <LandingPage/>
        </main>
    }
}
