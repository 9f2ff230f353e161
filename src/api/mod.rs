// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate;
pub mod http_server;
pub mod remix;

pub use errors::{ApiError, ApiJson, ErrorResponse};
pub use generate::{generate_handler, GenerateRequest, GenerateResponse};
pub use http_server::{build_router, start_server, AppState};
pub use remix::{remix_handler, RemixRequest, RemixResponse};
