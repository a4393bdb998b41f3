//! # Server Errors
//!
//! Failures while configuring or starting the document server. Request handling
//! itself has no error path: a missing `index.html` falls back to a bare shell.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid or unparsable environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Socket or filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
