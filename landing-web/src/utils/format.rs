//! # Formatting Utilities for the Landing Page
//!
//! Text assembled at render time.

/// Footer copyright line for `year`.
///
/// # Examples
///
/// ```rust
/// use landing_web::utils::format::copyright_line;
///
/// assert_eq!(copyright_line(2025), "© 2025 Showfari — All rights reserved.");
/// ```
pub fn copyright_line(year: u32) -> String {
    format!("© {} Showfari — All rights reserved.", year)
}

/// Label on the waitlist submit button.
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Submitting..."
    } else {
        "Notify Me"
    }
}
