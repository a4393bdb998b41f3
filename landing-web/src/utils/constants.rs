//! Application constants

/// Spreadsheet append endpoint that collects waitlist sign-ups.
pub const DEFAULT_WAITLIST_ENDPOINT: &str =
    "https://v1.nocodeapi.com/showfari/google_sheets/xAgnRsVwKKJRvBhw?tabId=Sheet1";

/// Endpoint baked into this build. Set `SHOWFARI_WAITLIST_ENDPOINT` at compile time to
/// point a staging build at a scratch sheet.
pub const WAITLIST_ENDPOINT: &str = match option_env!("SHOWFARI_WAITLIST_ENDPOINT") {
    Some(url) => url,
    None => DEFAULT_WAITLIST_ENDPOINT,
};

// UI constants
pub const BANNER_ALT: &str = "Showfari banner background";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
pub const THANK_YOU_MESSAGE: &str = "Thank you! We'll be in touch soon.";
