// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google generative language client for image prediction and prompt remixing

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use super::aspect::AspectRatio;
use super::error::{Operation, ProviderError};
use super::DATA_URI_PREFIX;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Google generative language API. The same credential
/// serves both the image prediction and text generation endpoints; the
/// model identifier is chosen per call.
pub struct GoogleClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// --- :predict response contract ---

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

// --- :generateContent response contract ---

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GoogleClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Generate one image via `models/{model}:predict` and return it as a
    /// PNG data URI. The aspect ratio parameter is only forwarded when the
    /// caller supplied a recognized ratio; the API defaults to square.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        aspect_ratio: Option<&str>,
    ) -> Result<String, ProviderError> {
        let op = Operation::ImageGeneration;

        let mut parameters = json!({
            "sampleCount": 1,
            "personGeneration": "ALLOW_ADULT",
        });
        if let Some(ratio) = aspect_ratio.and_then(AspectRatio::parse) {
            parameters["aspectRatio"] = json!(ratio.as_str());
        }
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": parameters,
        });

        // The key rides in the query string, so the full URL never gets logged.
        let url = format!(
            "{}/v1beta/models/{}:predict?key={}",
            self.base_url, model, self.api_key
        );
        debug!("Google predict request: model={}, aspect_ratio={:?}", model, aspect_ratio);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, op))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), &text, op));
        }

        let predict: PredictResponse = response
            .json()
            .await
            .map_err(|_| ProviderError::MalformedResponse { operation: op })?;

        let first = predict
            .predictions
            .into_iter()
            .next()
            .ok_or(ProviderError::MalformedResponse { operation: op })?;
        let b64 = first
            .bytes_base64_encoded
            .ok_or(ProviderError::MalformedResponse { operation: op })?;

        info!("Google image generated: model={}", model);
        Ok(format!("{}{}", DATA_URI_PREFIX, b64))
    }

    /// Rewrite a prompt via `models/{model}:generateContent`, asking the
    /// text model to make it more descriptive while keeping the subject.
    pub async fn remix(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let op = Operation::PromptRemix;

        let instruction = format!(
            "Rewrite the following image prompt to be more descriptive and visually appealing, \
             suitable for an AI image generator:\n\n\"{}\"",
            prompt
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": instruction }] }],
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        debug!("Google generateContent request: model={}", model);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, op))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), &text, op));
        }

        let content: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| ProviderError::MalformedResponse { operation: op })?;

        // candidates -> content -> parts -> text; a break anywhere in the
        // chain means the contract was not met.
        let text = content
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::MalformedResponse { operation: op })?;

        info!("Prompt remixed: model={}, chars={}", model, text.len());
        Ok(text)
    }
}
