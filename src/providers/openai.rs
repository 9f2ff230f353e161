// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI-compatible image generation client

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

use super::aspect::map_size;
use super::error::{Operation, ProviderError};
use super::DATA_URI_PREFIX;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(120);

/// Supported OpenAI image model families. The two families differ in
/// endpoint, payload shape, and the sizes they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAiImageModel {
    DallE3,
    GptImage1,
}

impl OpenAiImageModel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dall-e-3" => Some(OpenAiImageModel::DallE3),
            "gpt-image-1" => Some(OpenAiImageModel::GptImage1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpenAiImageModel::DallE3 => "dall-e-3",
            OpenAiImageModel::GptImage1 => "gpt-image-1",
        }
    }

    /// dall-e-3 goes through the shared generations endpoint and names
    /// itself in the payload; gpt-image-1 has a dedicated endpoint, so its
    /// payload carries no model field.
    fn endpoint_path(&self) -> &'static str {
        match self {
            OpenAiImageModel::DallE3 => "/v1/images/generations",
            OpenAiImageModel::GptImage1 => "/v1/images/gpt-image-1/generations",
        }
    }

    fn quality(&self) -> &'static str {
        match self {
            OpenAiImageModel::DallE3 => "standard",
            OpenAiImageModel::GptImage1 => "auto",
        }
    }
}

impl fmt::Display for OpenAiImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client for an OpenAI-compatible image generation API.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Generate one image and return it as a PNG data URI.
    pub async fn generate(
        &self,
        model: OpenAiImageModel,
        prompt: &str,
        aspect_ratio: Option<&str>,
    ) -> Result<String, ProviderError> {
        let op = Operation::ImageGeneration;
        let size = map_size(aspect_ratio, model);

        let mut body = json!({
            "prompt": prompt,
            "size": size,
            "n": 1,
            "response_format": "b64_json",
            "quality": model.quality(),
        });
        if let OpenAiImageModel::DallE3 = model {
            body["model"] = json!(model.as_str());
        }

        let url = format!("{}{}", self.base_url, model.endpoint_path());
        debug!("OpenAI generate request: model={}, size={}", model, size);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, op))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), &text, op));
        }

        let images: ImagesResponse = response
            .json()
            .await
            .map_err(|_| ProviderError::MalformedResponse { operation: op })?;

        let first = images
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::MalformedResponse { operation: op })?;
        let b64 = first
            .b64_json
            .ok_or(ProviderError::MalformedResponse { operation: op })?;

        info!("OpenAI image generated: model={}, size={}", model, size);
        Ok(format!("{}{}", DATA_URI_PREFIX, b64))
    }
}
