//! Waitlist form
//!
//! The page renders this twice. Both instances read and write the one
//! [`WaitlistContext`], so signing up through either replaces both with the thank-you
//! line.

use leptos::either::Either;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::waitlist::use_waitlist_context;
use crate::utils::constants::{EMAIL_PLACEHOLDER, THANK_YOU_MESSAGE};
use crate::utils::format::submit_label;

/// Where on the page a form sits; picks the lead-in copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPosition {
    Top,
    Bottom,
}

impl FormPosition {
    pub fn lead(&self) -> &'static str {
        match self {
            FormPosition::Top => {
                "Join our beta and be the first to explore the local scene and community here in Toronto."
            }
            FormPosition::Bottom => "Join our waitlist today!",
        }
    }
}

#[component]
pub fn WaitlistForm(position: FormPosition) -> impl IntoView {
    let waitlist = use_waitlist_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        waitlist.submit();
    };

    let form = move || {
        view! {
            <form class="waitlist-form" on:submit=on_submit>
                <div class="waitlist-field">
                    <input
                        type="email"
                        required=true
                        placeholder=EMAIL_PLACEHOLDER
                        class="waitlist-input"
                        class:waitlist-input-error=move || waitlist.error_message().is_some()
                        prop:value=move || waitlist.email()
                        on:input=move |ev| waitlist.set_email(event_target_value(&ev))
                    />
                    {move || {
                        waitlist
                            .error_message()
                            .map(|msg| view! { <span class="waitlist-error">{msg}</span> })
                    }}
                </div>

                <button
                    type="submit"
                    class="waitlist-button"
                    disabled=move || waitlist.is_submitting()
                >
                    {move || {
                        let submitting = waitlist.is_submitting();
                        if submitting {
                            Either::Left(view! {
                                <span class="spinner"></span>
                                {submit_label(submitting)}
                            })
                        } else {
                            Either::Right(submit_label(submitting))
                        }
                    }}
                </button>
            </form>
        }
    };

    view! {
        <div class="waitlist">
            <div class="accent-bar"></div>
            <p class="waitlist-lead">{position.lead()}</p>

            <Show
                when=move || waitlist.is_submitted()
                fallback=form
            >
                <p class="waitlist-thanks">{THANK_YOU_MESSAGE}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_have_distinct_leads() {
        assert_ne!(FormPosition::Top.lead(), FormPosition::Bottom.lead());
        assert_eq!(FormPosition::Bottom.lead(), "Join our waitlist today!");
    }
}
