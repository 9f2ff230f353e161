// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response type

use serde::{Deserialize, Serialize};

/// Success response from image generation. Failures never use this shape;
/// they go out as `ErrorResponse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Always true on this shape
    pub success: bool,
    /// Generated image as a self-contained PNG data URI
    pub image_data: String,
}

impl GenerateResponse {
    pub fn new(image_data: String) -> Self {
        Self {
            success: true,
            image_data,
        }
    }
}
