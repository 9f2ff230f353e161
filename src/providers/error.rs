// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Classification of upstream failures into a single error shape

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which outbound operation a failure belongs to. Only used to word the
/// fixed messages; both operations share the same taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ImageGeneration,
    PromptRemix,
}

impl Operation {
    pub fn service_name(&self) -> &'static str {
        match self {
            Operation::ImageGeneration => "image generation",
            Operation::PromptRemix => "prompt remix",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.service_name())
    }
}

/// Adapter-layer failure, one variant per failure mode:
/// the upstream answered with an error status, the call never got a
/// response, the request failed before it was sent, or a 2xx body did not
/// match the documented contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("No response received from {operation} service.")]
    NoResponse { operation: Operation },

    #[error("Failed to send {operation} request: {message}")]
    RequestSetup { operation: Operation, message: String },

    #[error("Invalid response format received from {operation} API.")]
    MalformedResponse { operation: Operation },
}

impl ProviderError {
    /// Classify a transport-level failure from `reqwest`. Builder failures
    /// never left the process; everything else (connect, timeout, reset)
    /// means the call was sent but nothing usable came back.
    pub fn from_transport(err: reqwest::Error, operation: Operation) -> Self {
        // Connect errors also report is_request(), so check builder first
        // and treat everything that made it onto the wire as NoResponse.
        if err.is_builder() {
            ProviderError::RequestSetup {
                operation,
                message: err.to_string(),
            }
        } else {
            ProviderError::NoResponse { operation }
        }
    }

    /// Build the error for a non-2xx upstream response. Both Google and the
    /// OpenAI-compatible APIs nest the human message under `error.message`;
    /// anything else falls back to a generic message for the operation.
    pub fn from_status(status: u16, body: &str, operation: Operation) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| fallback_status_message(operation));

        ProviderError::UpstreamStatus { status, message }
    }
}

fn fallback_status_message(operation: Operation) -> String {
    match operation {
        Operation::ImageGeneration => "Failed to generate image due to API error.".to_string(),
        Operation::PromptRemix => "Failed to remix prompt due to API error.".to_string(),
    }
}
