//! HTTP API for statement extraction.

mod error;
mod routes;

use std::path::PathBuf;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use stmtx_core::models::config::{ServerConfig, StmtxConfig};
use stmtx_core::{Platform, StatementExtractor};

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub extractor: StatementExtractor,
    pub default_platform: Platform,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &StmtxConfig) -> anyhow::Result<Self> {
        let extractor = StatementExtractor::from_config(&config.extraction)?;

        let upload_dir = match &config.server.upload_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                dir.clone()
            }
            None => std::env::temp_dir(),
        };

        Ok(Self {
            extractor,
            default_platform: Platform::new(config.extraction.default_platform.as_str()),
            upload_dir,
        })
    }
}

/// Build the API router.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/process-file", post(routes::process_file))
        .route("/api/test-data", post(routes::test_data))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.request_timeout_secs > 0 {
        router.layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
    } else {
        router
    }
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: StmtxConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = router(state, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving API on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
}
