// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_image_node::{api::http_server, AppState, Config};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    if !dotenv_loaded {
        tracing::warn!("No .env file found, using system environment variables");
    }

    let config = Config::from_env();
    config.validate()?;

    if config.google_api_key.is_some() && config.google_image_model.is_none() {
        tracing::warn!("IMAGE_MODEL is not set; google generation requests will fail");
    }
    if config.google_api_key.is_some() && config.google_remix_model.is_none() {
        tracing::warn!("REMIX_MODEL is not set; remix requests will fail");
    }

    let state = AppState::from_config(config)?;
    http_server::start_server(state).await
}
