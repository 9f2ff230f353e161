// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::GenerateRequest;
use super::response::GenerateResponse;
use crate::api::errors::{ApiError, ApiJson};
use crate::api::http_server::AppState;
use crate::providers::ProviderSelection;

/// POST /api/generate - Generate an image from a text prompt
///
/// Pipeline:
/// 1. Validate request and resolve the provider selection
/// 2. Check the selected provider's credentials and model config (500 if absent)
/// 3. Call the provider adapter (single attempt, no retries)
/// 4. Return the unified success shape or the normalized error
pub async fn generate_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    debug!(
        "Generation request received: prompt_len={}, aspect_ratio={:?}, provider={:?}",
        request.prompt.len(),
        request.aspect_ratio,
        request.provider
    );

    let selection = request.validate().map_err(|e| {
        warn!("Generation request validation failed: {}", e);
        ApiError::Validation(e)
    })?;

    let image_data = match selection {
        ProviderSelection::Google => {
            let client = state.google.as_ref().ok_or_else(|| {
                warn!("Google generation requested but GEMINI_API_KEY is not set");
                ApiError::Config("API key configuration missing.".to_string())
            })?;
            let model = state.config.google_image_model.as_deref().ok_or_else(|| {
                warn!("Google generation requested but IMAGE_MODEL is not set");
                ApiError::Config("Image model configuration missing.".to_string())
            })?;

            client
                .generate(model, &request.prompt, request.aspect_ratio.as_deref())
                .await
                .map_err(|e| {
                    warn!("Google image generation failed: {}", e);
                    ApiError::from(e)
                })?
        }
        ProviderSelection::OpenAi(model) => {
            let client = state.openai.as_ref().ok_or_else(|| {
                warn!("OpenAI generation requested but OPENAI_API_KEY is not set");
                ApiError::Config("OpenAI API key configuration missing.".to_string())
            })?;

            client
                .generate(model, &request.prompt, request.aspect_ratio.as_deref())
                .await
                .map_err(|e| {
                    warn!("OpenAI image generation failed: {}", e);
                    ApiError::from(e)
                })?
        }
    };

    // Adapters only succeed with a populated data URI; an empty payload here
    // means the contract broke somewhere, not a blank image to hand out.
    if image_data.is_empty() {
        warn!("Adapter returned success with an empty payload");
        return Err(ApiError::UpstreamFormat(
            "Invalid response format received from image generation API.".to_string(),
        ));
    }

    info!(
        "Image generated: provider={}, payload_chars={}",
        selection.label(),
        image_data.len()
    );

    Ok(Json(GenerateResponse::new(image_data)))
}
