//! Main webserver implementation
//!
//! Routes the merge API and serves the static form UI. Everything with
//! real logic lives behind the injected engine.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{error, info};

use dedupe::{MergeEngine, RecordStore};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::api;

/// HTTP front end over the duplicate merge engine
pub struct WebServer<S: RecordStore> {
    state: Arc<AppState<S>>,
    static_dir: PathBuf,
}

impl<S: RecordStore + 'static> WebServer<S> {
    pub fn new(engine: MergeEngine<S>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: Arc::new(AppState::new(engine)),
            static_dir: static_dir.into(),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // API routes
            .route("/api/merge", post(api::run_merge::<S>))
            .route("/api/status", get(api::get_status))
            .with_state(self.state.clone())
            // Form UI and other static assets
            .fallback_service(ServeDir::new(&self.static_dir))
    }

    /// Serve until Ctrl+C.
    pub async fn run(&self, addr: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            WebServerError::ServerStartup {
                message: format!("failed to bind {addr}: {e}"),
            }
        })?;

        info!("🌐 WebServer listening on http://{addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| WebServerError::ServerStartup {
                message: e.to_string(),
            })
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutting down: received Ctrl+C"),
        Err(err) => error!("❌ Signal handling failed: {err}"),
    }
}
