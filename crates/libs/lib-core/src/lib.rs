//! # Core Library
//!
//! Page state and rules that do not depend on the DOM: email validation, the waitlist
//! submission state machine, banner rotation, and the error taxonomy shown to visitors.
//!
//! The browser crate owns rendering and HTTP; it plugs into this crate through
//! [`waitlist::WaitlistStore`] and [`waitlist::WaitlistClient`].

pub mod banner;
pub mod error;
pub mod validation;
pub mod waitlist;

// Re-export commonly used types
pub use banner::BannerRotation;
pub use error::{WaitlistError, Result};
pub use validation::{is_valid_email, validate_email};
pub use waitlist::{submit, WaitlistClient, WaitlistState, WaitlistStore};
