// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt remix endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::RemixRequest;
use super::response::RemixResponse;
use crate::api::errors::{ApiError, ApiJson};
use crate::api::http_server::AppState;

/// POST /api/remix - Rewrite a prompt to be more descriptive
///
/// Same shape as generation: validate, check config, delegate to the one
/// supported remix adapter, normalize the outcome.
pub async fn remix_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RemixRequest>,
) -> Result<Json<RemixResponse>, ApiError> {
    debug!("Remix request received: prompt_len={}", request.prompt.len());

    request.validate().map_err(|e| {
        warn!("Remix request validation failed: {}", e);
        ApiError::Validation(e)
    })?;

    let client = state.google.as_ref().ok_or_else(|| {
        warn!("Remix requested but GEMINI_API_KEY is not set");
        ApiError::Config("API key configuration missing.".to_string())
    })?;
    let model = state.config.google_remix_model.as_deref().ok_or_else(|| {
        warn!("Remix requested but REMIX_MODEL is not set");
        ApiError::Config("Remix model configuration missing.".to_string())
    })?;

    let remixed_prompt = client.remix(model, &request.prompt).await.map_err(|e| {
        warn!("Prompt remix failed: {}", e);
        ApiError::from(e)
    })?;

    info!("Prompt remixed: chars={}", remixed_prompt.len());

    Ok(Json(RemixResponse::new(remixed_prompt)))
}
