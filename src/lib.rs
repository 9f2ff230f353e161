// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod providers;

// Re-export main types
pub use api::errors::{ApiError, ErrorResponse};
pub use api::http_server::{build_router, start_server, AppState};
pub use config::Config;
pub use providers::{
    map_size, AspectRatio, GoogleClient, OpenAiClient, OpenAiImageModel, Operation, ProviderError,
    ProviderSelection,
};
