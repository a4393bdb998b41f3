//! Reactive state

pub mod waitlist;
