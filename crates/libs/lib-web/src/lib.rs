//! # Web Library
//!
//! Document server for the landing page: configuration, head rendering, routes,
//! and request logging middleware.

pub mod config;
pub mod error;
pub mod head;
pub mod middleware;
pub mod server;

pub use config::Config;
pub use error::{ServerError, Result};
pub use server::{app, start_server, AppState};
