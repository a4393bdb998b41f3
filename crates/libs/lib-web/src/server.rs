//! # Server Setup
//!
//! Router construction and HTTP server startup.
//!
//! ## Routes
//!
//! - `GET /health` - liveness check
//! - `GET /`, `GET /index.html` - page document with rendered head
//! - anything else - file from the dist directory, or the page document when no
//!   file matches

// region: --- Imports
use axum::{
    extract::State,
    middleware,
    response::Html,
    routing::{get, MethodRouter},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::head::{fallback_document, inject_head, render_head};
use crate::middleware::{log_requests, stamp_req, RequestStamp};
use shared::{SiteMetadata, SITE_METADATA};
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    /// Fully rendered page document
    pub index_html: Arc<str>,
}

impl AppState {
    /// Render the page document from a built `index.html`, or from a bare shell when
    /// `template` is `None`.
    pub fn new(template: Option<&str>, meta: &SiteMetadata, site_url: &str) -> Self {
        let head = render_head(meta, site_url);
        let index_html = match template {
            Some(template) => inject_head(template, &head, meta.lang),
            None => fallback_document(&head, meta.lang),
        };
        Self {
            index_html: index_html.into(),
        }
    }

    /// Read `index.html` from the configured dist directory.
    pub fn load(config: &Config) -> Self {
        let index_path = config.dist_dir.join("index.html");
        let template = match std::fs::read_to_string(&index_path) {
            Ok(template) => Some(template),
            Err(e) => {
                warn!(
                    "Could not read {}: {}. Serving a bare document; run `trunk build` in landing-web.",
                    index_path.display(),
                    e
                );
                None
            }
        };
        Self::new(template.as_deref(), &SITE_METADATA, &config.site_url)
    }
}
// endregion: --- AppState

// region: --- Handlers
async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.to_string())
}

async fn health() -> &'static str {
    "ok"
}
// endregion: --- Handlers

// region: --- Router
/// Build the router serving `dist_dir`.
pub fn app(state: AppState, dist_dir: &Path) -> Router {
    // Client-side paths and missing files get the page document
    let index: MethodRouter = get(serve_index).with_state(state.clone());

    Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(dist_dir).fallback(index))
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // Outermost so every inner layer sees the stamp
        .layer(middleware::from_fn(stamp_req))
}
// endregion: --- Router

// region: --- Server Setup
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(log_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))
}

/// Initialize logging, render the page document and serve until the process stops.
///
/// # Errors
///
/// Fails if the configuration is invalid, the tracing subscriber is already set, or
/// the bind address cannot be bound.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    init_tracing(&config.log_level)?;

    info!("SHOWFARI DOCUMENT SERVER STARTING");
    info!("Log level: {}", config.log_level);
    info!("Serving from: {}", config.dist_dir.display());
    info!("Site URL: {}", config.site_url);

    let state = AppState::load(&config);
    let router = app(state, &config.dist_dir);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const TEMPLATE: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\" /></head>\n<body><div id=\"leptos-loading\"></div></body>\n</html>\n";

    fn test_state() -> AppState {
        AppState::new(Some(TEMPLATE), &SITE_METADATA, "https://showfari.ca")
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(test_state(), dist.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_index_carries_metadata() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(test_state(), dist.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Showfari — Discover Toronto’s Scene</title>"));
        assert!(body.contains(r#"<meta property="og:site_name" content="Showfari" />"#));
        assert!(body.contains(r#"<meta name="twitter:card" content="summary" />"#));
        assert!(body.contains("leptos-loading"));
    }

    #[tokio::test]
    async fn test_unknown_path_gets_document() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app(test_state(), dist.path()), "/anything/else").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("og:title"));
    }

    #[tokio::test]
    async fn test_serves_dist_files() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dist.path().join("banners")).unwrap();
        std::fs::write(dist.path().join("banners/1.jpg"), b"jpeg bytes").unwrap();

        let (status, body) = get_body(app(test_state(), dist.path()), "/banners/1.jpg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "jpeg bytes");
    }

    #[tokio::test]
    async fn test_raw_index_is_never_served() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), TEMPLATE).unwrap();

        let (_, body) = get_body(app(test_state(), dist.path()), "/index.html").await;
        assert!(body.contains("og:title"));
    }

    #[tokio::test]
    async fn test_response_has_request_id() {
        let dist = tempfile::tempdir().unwrap();
        let response = app(test_state(), dist.path())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[test]
    fn test_missing_template_uses_bare_document() {
        let state = AppState::new(None, &SITE_METADATA, "https://showfari.ca");
        assert!(state.index_html.starts_with("<!DOCTYPE html>"));
        assert!(state.index_html.contains("<html lang=\"en\">"));
        assert!(state.index_html.contains("<title>"));
    }

    #[test]
    fn test_load_without_dist_dir() {
        let config = Config {
            dist_dir: std::path::PathBuf::from("/nonexistent/showfari/dist"),
            ..Default::default()
        };
        let state = AppState::load(&config);
        assert!(state.index_html.contains("og:url"));
    }
}
