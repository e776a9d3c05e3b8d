//! Static file server for the built documentation site.

use std::path::Path;

use axum::Router;
use thiserror::Error;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

mod settings;

use settings::ServerConfig;

/// Server startup errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Listen address could not be parsed.
    #[error("Invalid listen address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Logger installation error.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Socket or file system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serve `site_root`, answering unknown paths with its `index.html` so
/// client-side routes resolve.
fn create_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(CompressionLayer::new())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    if !config.site_root.join("index.html").exists() {
        log::warn!(
            "{} has no index.html; build the site with `cargo leptos build` first",
            config.site_root.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "serving {} on http://{addr}",
        config.site_root.display()
    );
    axum::serve(listener, create_router(&config.site_root)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>docs</html>").expect("write");
        std::fs::create_dir(dir.path().join("pkg")).expect("mkdir");
        std::fs::write(dir.path().join("pkg/sqwish-docs.js"), "export {}").expect("write");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let dir = site();
        let (status, body) = get(create_router(dir.path()), "/pkg/sqwish-docs.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export {}");
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_index() {
        let dir = site();
        let (status, body) = get(create_router(dir.path()), "/docs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>docs</html>");
    }
}
