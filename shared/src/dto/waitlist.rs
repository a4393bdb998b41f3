//! # Waitlist Data Transfer Objects
//!
//! Body of the spreadsheet append call made when someone joins the waitlist.

use serde::{Deserialize, Serialize};

/// Rows to append to the waitlist sheet.
///
/// Serializes as a bare JSON table (`[["a@b.c"]]`), which is the shape the
/// spreadsheet endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SheetAppend(Vec<Vec<String>>);

impl SheetAppend {
    /// One row holding one cell: the submitted email address.
    pub fn single(email: impl Into<String>) -> Self {
        Self(vec![vec![email.into()]])
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }
}
