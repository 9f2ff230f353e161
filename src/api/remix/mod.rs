// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt remix endpoint: POST /api/remix

pub mod handler;
pub mod request;
pub mod response;

pub use handler::remix_handler;
pub use request::RemixRequest;
pub use response::RemixResponse;
