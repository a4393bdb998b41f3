//! UI Components

pub mod banner;
pub mod footer;
pub mod waitlist_form;

pub use banner::Banner;
pub use footer::Footer;
pub use waitlist_form::{FormPosition, WaitlistForm};
