// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt remix response type

use serde::{Deserialize, Serialize};

/// Success response from prompt remixing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixResponse {
    /// Always true on this shape
    pub success: bool,
    /// The rewritten prompt; non-empty, ready to feed back into generation
    pub remixed_prompt: String,
}

impl RemixResponse {
    pub fn new(remixed_prompt: String) -> Self {
        Self {
            success: true,
            remixed_prompt,
        }
    }
}
