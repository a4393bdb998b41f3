//! # Server Configuration
//!
//! Read from the environment (after `dotenvy` has loaded `.env` in the binary).
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDRESS` | `127.0.0.1:8080` |
//! | `DIST_DIR` | `landing-web/dist` |
//! | `SITE_URL` | `https://showfari.ca` |
//! | `LOG_LEVEL` | `info` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Result, ServerError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    /// Trunk output directory holding `index.html`, the wasm bundle and assets
    pub dist_dir: PathBuf,
    /// Public URL of the page, rendered as `og:url`
    pub site_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            dist_dir: PathBuf::from("landing-web/dist"),
            site_url: shared::SITE_METADATA.open_graph.url.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            dist_dir: env::var("DIST_DIR").map(PathBuf::from).unwrap_or(defaults.dist_dir),
            site_url: env::var("SITE_URL").unwrap_or(defaults.site_url),
            log_level: env::var("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        let host = self
            .site_url
            .strip_prefix("https://")
            .or_else(|| self.site_url.strip_prefix("http://"))
            .ok_or_else(|| {
                ServerError::Config(format!("SITE_URL must be an http(s) URL, got {:?}", self.site_url))
            })?;
        if host.is_empty() || host.starts_with('/') {
            return Err(ServerError::Config(format!("SITE_URL has no host: {:?}", self.site_url)));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ServerError::Config(format!(
                "LOG_LEVEL must be one of {}, got {:?}",
                LOG_LEVELS.join("|"),
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|_| {
            ServerError::Config(format!("BIND_ADDRESS must be host:port, got {:?}", self.bind_address))
        })
    }
}
