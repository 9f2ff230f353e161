// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod aspect;
pub mod error;
pub mod google;
pub mod openai;

pub use aspect::{map_size, AspectRatio, FALLBACK_SIZE};
pub use error::{Operation, ProviderError};
pub use google::GoogleClient;
pub use openai::{OpenAiClient, OpenAiImageModel};

/// Prefix every successful generation payload is wrapped in. The upstreams
/// hand back raw base64; the front-end consumes a self-contained data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Closed set of provider choices a validated generation request resolves to.
/// Dispatch is a match on this enum, so adding a provider is a compile error
/// until every call site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSelection {
    Google,
    OpenAi(OpenAiImageModel),
}

impl ProviderSelection {
    /// Wire-level provider tag, used for logging.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderSelection::Google => "google",
            ProviderSelection::OpenAi(_) => "openai",
        }
    }
}
