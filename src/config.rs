// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Provider configuration read once at startup

use anyhow::{bail, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Process-wide provider configuration. Built from the environment once in
/// `main` and injected into handlers through `AppState`; immutable for the
/// life of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Credential for the Google image and remix endpoints
    pub google_api_key: Option<String>,
    /// Google image model identifier, e.g. "imagen-3.0-generate-002"
    pub google_image_model: Option<String>,
    /// Google text model used for prompt remixing, e.g. "gemini-2.0-flash"
    pub google_remix_model: Option<String>,
    /// Credential for the OpenAI-compatible image endpoints
    pub openai_api_key: Option<String>,
    /// Base URL of the Google generative language API
    pub google_base_url: String,
    /// Base URL of the OpenAI-compatible API
    pub openai_base_url: String,
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            google_api_key: env_non_empty("GEMINI_API_KEY"),
            google_image_model: env_non_empty("IMAGE_MODEL"),
            google_remix_model: env_non_empty("REMIX_MODEL"),
            openai_api_key: env_non_empty("OPENAI_API_KEY"),
            google_base_url: env_non_empty("GOOGLE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_BASE_URL.to_string()),
            openai_base_url: env_non_empty("OPENAI_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
        }
    }

    /// The server refuses to start without at least one image generation
    /// credential. Model identifiers are checked per request instead, so a
    /// partially configured node can still serve the paths it supports.
    pub fn validate(&self) -> Result<()> {
        if self.google_api_key.is_none() && self.openai_api_key.is_none() {
            bail!("GEMINI_API_KEY or OPENAI_API_KEY must be set");
        }
        Ok(())
    }

    /// Config with no credentials and default endpoints; skips validation.
    pub fn empty() -> Self {
        Self {
            port: DEFAULT_PORT,
            google_api_key: None,
            google_image_model: None,
            google_remix_model: None,
            openai_api_key: None,
            google_base_url: DEFAULT_GOOGLE_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}
