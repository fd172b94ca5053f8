//! Static server for the compiled frontend, using Axum

use anyhow::{Context, Result};
use axum::{response::Html, routing::get, Json, Router};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Where `serve` listens and what it serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Trunk output directory (contains `index.html`)
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Create the web router
///
/// Serves `dist_dir` with an `index.html` fallback when the bundle exists,
/// and a build-instructions page otherwise.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let has_frontend = index.is_file();

    let api = Router::new().route("/api/health", get(move || health_handler(has_frontend)));

    let router = if has_frontend {
        api.fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
    } else {
        warn!(
            "Frontend bundle not found at {}, serving setup page",
            dist_dir.display()
        );
        api.route("/", get(setup_handler))
    };

    router.layer(TraceLayer::new_for_http())
}

/// Run the web server until it fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let router = create_router(&config.dist_dir);

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

async fn health_handler(has_frontend: bool) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "frontend": has_frontend,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn setup_handler() -> Html<&'static str> {
    Html(SETUP_PAGE)
}

const SETUP_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>multiform - Build Required</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 40rem; margin: 4rem auto;">
    <h1>Frontend not built</h1>
    <p>Compile the Leptos app, then restart the server:</p>
    <pre>rustup target add wasm32-unknown-unknown
cd crates/multiform-web &amp;&amp; trunk build --release
cargo run -- serve</pre>
    <p>Health check: <a href="/api/health">/api/health</a></p>
</body>
</html>"#;
