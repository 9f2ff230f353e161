// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Unified API error taxonomy and wire shape

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::providers::ProviderError;

/// `Json` extractor whose rejections come back in the unified error shape
/// instead of axum's plain-text defaults. Every handler takes its body
/// through this.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Every failure leaves the server in this shape, paired with an HTTP
/// status. The front-end surfaces `error` verbatim, so `Display` for
/// `ApiError` is the bare human-readable message with no prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client input malformed (400)
    Validation(String),
    /// Server missing credentials or model names for the requested path (500)
    Config(String),
    /// Upstream answered with a non-2xx status, passed through
    UpstreamHttp { status: u16, message: String },
    /// Outbound call sent but no response arrived (500)
    UpstreamUnreachable(String),
    /// Failure before the outbound call was sent (500)
    RequestSetup(String),
    /// Upstream 2xx response did not match the expected contract (500)
    UpstreamFormat(String),
    NotFound,
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound => 404,
            ApiError::UpstreamHttp { status, .. } => *status,
            ApiError::Config(_)
            | ApiError::UpstreamUnreachable(_)
            | ApiError::RequestSetup(_)
            | ApiError::UpstreamFormat(_)
            | ApiError::Internal => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error: self.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg)
            | ApiError::Config(msg)
            | ApiError::UpstreamUnreachable(msg)
            | ApiError::RequestSetup(msg)
            | ApiError::UpstreamFormat(msg) => write!(f, "{}", msg),
            ApiError::UpstreamHttp { message, .. } => write!(f, "{}", message),
            ApiError::NotFound => write!(f, "Not Found"),
            ApiError::Internal => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                ApiError::Validation("Invalid JSON payload.".to_string())
            }
            // Body read failures and any rejection added in a future axum
            _ => ApiError::Internal,
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        let message = err.to_string();
        match err {
            ProviderError::UpstreamStatus { status, .. } => {
                ApiError::UpstreamHttp { status, message }
            }
            ProviderError::NoResponse { .. } => ApiError::UpstreamUnreachable(message),
            ProviderError::RequestSetup { .. } => ApiError::RequestSetup(message),
            ProviderError::MalformedResponse { .. } => ApiError::UpstreamFormat(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Out-of-range upstream statuses collapse to 500.
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_response())).into_response()
    }
}
