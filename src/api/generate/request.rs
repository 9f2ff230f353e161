// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request type and validation

use serde::{Deserialize, Serialize};

use crate::providers::{OpenAiImageModel, ProviderSelection};

/// Request for image generation via POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Text prompt describing the desired image. Defaults to empty when
    /// absent so a missing prompt surfaces through `validate()` rather than
    /// as a deserialization failure.
    #[serde(default)]
    pub prompt: String,

    /// Logical aspect ratio, e.g. "16:9". Unrecognized values fall back to
    /// square downstream rather than being rejected here.
    #[serde(default)]
    pub aspect_ratio: Option<String>,

    /// Provider selector: "google" (default) or "openai"
    #[serde(default)]
    pub provider: Option<String>,

    /// OpenAI model family; required when provider is "openai"
    #[serde(default)]
    pub openai_model: Option<String>,
}

impl GenerateRequest {
    /// Validate the request and resolve it to a provider selection.
    pub fn validate(&self) -> Result<ProviderSelection, String> {
        if self.prompt.trim().is_empty() {
            return Err("Prompt is required.".to_string());
        }

        let provider = self
            .provider
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("google");

        match provider {
            "google" => Ok(ProviderSelection::Google),
            "openai" => {
                let model = self
                    .openai_model
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
                    .ok_or_else(|| {
                        "An OpenAI model is required when provider is \"openai\".".to_string()
                    })?;

                OpenAiImageModel::parse(model)
                    .map(ProviderSelection::OpenAi)
                    .ok_or_else(|| format!("Unsupported OpenAI model '{}'.", model))
            }
            other => Err(format!("Unknown provider '{}'.", other)),
        }
    }
}
