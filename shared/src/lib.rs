//! # Shared Site Contract
//!
//! Types and static data shared between the browser page (`landing-web`) and the
//! document server (`lib-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Wire types sent to external services
//!   - **[`dto::waitlist`]**: Spreadsheet append body for waitlist sign-ups
//! - **[`site`]**: Page metadata and static asset references
//!
//! ## Wire Format
//!
//! The spreadsheet endpoint takes a JSON table: an array of rows, each row an array
//! of cell strings. A waitlist sign-up is a single row with a single cell:
//!
//! ```rust
//! use shared::dto::waitlist::SheetAppend;
//!
//! let body = serde_json::to_string(&SheetAppend::single("fan@example.com")).unwrap();
//! assert_eq!(body, r#"[["fan@example.com"]]"#);
//! ```

pub mod dto;
pub mod site;

pub use dto::*;
pub use site::{SiteMetadata, OpenGraph, TwitterCard, SITE_METADATA, BANNER_IMAGES};
