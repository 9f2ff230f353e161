// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt remix request type and validation

use serde::{Deserialize, Serialize};

/// Request for prompt remixing via POST /api/remix. The remix provider is
/// fixed; there is no selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemixRequest {
    /// Prompt to rewrite. Defaults to empty when absent so a missing prompt
    /// surfaces through `validate()` rather than as a deserialization failure.
    #[serde(default)]
    pub prompt: String,
}

impl RemixRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("Prompt is required for remixing.".to_string());
        }
        Ok(())
    }
}
