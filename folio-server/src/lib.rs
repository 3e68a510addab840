//! folio-server: preview server for the rendered site
//!
//! Serves the publications and projects pages rendered at start-up, plus
//! the static asset directory, with request tracing and graceful shutdown.

pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use folio_core::Site;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:4000)
    pub bind_addr: SocketAddr,

    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .nest_service("/static", ServeDir::new(static_dir.into()))
        .fallback(routes::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run_server(site: &Site, config: ServerConfig) -> ServerResult<()> {
    let state = AppState::new(site);
    tracing::info!(static_dir = %config.static_dir.display(), "pages rendered");

    let app = build_router(state, config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use folio_core::{Catalogue, FolioConfig};
    use tower::ServiceExt;

    fn app(static_dir: PathBuf) -> Router {
        let site = Site::new(FolioConfig::default(), Catalogue::builtin()).unwrap();
        build_router(AppState::new(&site), static_dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 4000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get(app(PathBuf::from("static")), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""status":"ok""#));
    }

    #[tokio::test]
    async fn test_pages_are_served() {
        let app = app(PathBuf::from("static"));

        let (status, body) = get(app.clone(), "/publications").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Publications</h1>"));

        let (status, body) = get(app.clone(), "/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Projects</h1>"));

        let (status, index) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        let (_, publications) = get(app, "/publications").await;
        assert_eq!(index, publications);
    }

    #[tokio::test]
    async fn test_built_site_urls_are_served() {
        let app = app(PathBuf::from("static"));
        let (_, projects) = get(app.clone(), "/projects").await;
        let (_, publications) = get(app.clone(), "/publications").await;

        for (uri, expected) in [
            ("/projects/", &projects),
            ("/projects/index.html", &projects),
            ("/publications/", &publications),
            ("/publications/index.html", &publications),
            ("/index.html", &publications),
        ] {
            let (status, body) = get(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(&body, expected, "{uri}");
        }

        let (status, _) = get(app, "/blog/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_paths_are_404() {
        let app = app(PathBuf::from("static"));

        let (status, body) = get(app.clone(), "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No page at /blog"));

        let (status, _) = get(app, "/a/b/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_assets() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/Drone.png"), b"png-bytes").unwrap();

        let (status, body) = get(app(dir.path().to_path_buf()), "/static/images/Drone.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png-bytes");
    }
}
