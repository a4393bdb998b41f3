//! # Validation Utilities
//!
//! Email shape check run before any network call.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, WaitlistError};

/// ECMAScript WhiteSpace and LineTerminator code points, as a class body.
///
/// Unicode `\s` differs from browser `\s`: it includes U+0085 and leaves out U+FEFF.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// One or more non-space/non-`@` chars, `@`, then a domain with at least one inner `.`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{}@]+", WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

/// Check that `email` looks like `local@domain.tld`.
///
/// The input is lowercased first; the pattern has no letters so this never changes the
/// outcome, it only mirrors how addresses are compared elsewhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// Validate email format.
pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(WaitlistError::InvalidEmail(email.to_string()))
    }
}
