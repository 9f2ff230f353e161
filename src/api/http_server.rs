// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Router assembly and server startup

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::errors::ApiError;
use super::generate::generate_handler;
use super::remix::remix_handler;
use crate::config::Config;
use crate::providers::{GoogleClient, OpenAiClient};

/// Shared read-only state injected into every handler. Clients exist only
/// for the providers the config carries credentials for; handlers turn a
/// missing client into a ConfigError.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub google: Option<Arc<GoogleClient>>,
    pub openai: Option<Arc<OpenAiClient>>,
}

impl AppState {
    /// Build a client for every provider the config has a credential for.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let google = match config.google_api_key.as_deref() {
            Some(key) => Some(Arc::new(GoogleClient::new(&config.google_base_url, key)?)),
            None => None,
        };
        let openai = match config.openai_api_key.as_deref() {
            Some(key) => Some(Arc::new(OpenAiClient::new(&config.openai_base_url, key)?)),
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            google,
            openai,
        })
    }

    /// State with no providers configured, for handler-level tests.
    pub fn new_for_test() -> Self {
        Self {
            config: Arc::new(Config::empty()),
            google: None,
            openai: None,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/remix", post(remix_handler))
        .fallback(fallback_handler)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let port = state.config.port;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Backend server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Unmatched routes get the unified error shape instead of a bare 404.
async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}
