//! HTTP layer exposing the metric engine as a JSON API.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

/// Build the application router.
pub fn router(settings: Settings) -> Router {
    let state = AppState { settings };
    Router::new()
        .route("/health", get(routes::health))
        .route("/metrics", post(routes::compute))
        .route("/sample-size", get(routes::sample_size))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let router = router(settings);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving epicalc API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
