//! Gateway HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::info;

use aria_config::RelayConfig;

use crate::relay;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub client: reqwest::Client,
    pub config: Arc<RelayConfig>,
}

impl GatewayState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/chat", post(relay::chat))
        .route("/api/health", get(|| async { "OK" }))
        .with_state(state)
}

/// Start the axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = router(state);
    info!("gateway listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
