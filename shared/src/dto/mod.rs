//! # Data Transfer Objects (DTOs)
//!
//! Request bodies sent from the page to third-party collaborators.
//!
//! ## Module Organization
//!
//! - [`waitlist`] - Spreadsheet row append used by the waitlist form
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /showfari/google_sheets/<key>?tabId=Sheet1
//! Content-Type: application/json
//!
//! [["fan@example.com"]]
//! ```
//!
//! Any 2xx response means the row was appended. The response body is never parsed.

pub mod waitlist;

pub use waitlist::*;
