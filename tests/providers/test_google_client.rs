// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for GoogleClient against a local mock upstream

use std::sync::{Arc, Mutex};

use axum::http::{StatusCode, Uri};
use axum::{Json, Router};
use serde_json::{json, Value};

use fabstir_image_node::providers::{GoogleClient, Operation, ProviderError};

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_generate_wraps_first_prediction_as_data_uri() {
    let upstream = Router::new().fallback(|| async {
        Json(json!({
            "predictions": [
                { "bytesBase64Encoded": "aWJt" },
                { "bytesBase64Encoded": "c2Vjb25k" }
            ]
        }))
    });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let result = client.generate("imagen-test", "a cat", None).await.unwrap();

    assert_eq!(result, "data:image/png;base64,aWJt");
}

#[tokio::test]
async fn test_generate_request_shape_with_aspect_ratio() {
    let captured: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
    let cap = captured.clone();
    let upstream = Router::new().fallback(move |uri: Uri, Json(body): Json<Value>| {
        let cap = cap.clone();
        async move {
            *cap.lock().unwrap() = Some((uri.to_string(), body));
            Json(json!({ "predictions": [{ "bytesBase64Encoded": "aWJt" }] }))
        }
    });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    client
        .generate("imagen-test", "a cat", Some("16:9"))
        .await
        .unwrap();

    let (uri, body) = captured.lock().unwrap().take().unwrap();
    assert!(uri.contains("/v1beta/models/imagen-test:predict"));
    assert!(uri.contains("key=test-key"));
    assert_eq!(body["instances"][0]["prompt"], "a cat");
    assert_eq!(body["parameters"]["sampleCount"], 1);
    assert_eq!(body["parameters"]["aspectRatio"], "16:9");
    assert_eq!(body["parameters"]["personGeneration"], "ALLOW_ADULT");
}

#[tokio::test]
async fn test_generate_omits_unrecognized_aspect_ratio() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let cap = captured.clone();
    let upstream = Router::new().fallback(move |Json(body): Json<Value>| {
        let cap = cap.clone();
        async move {
            *cap.lock().unwrap() = Some(body);
            Json(json!({ "predictions": [{ "bytesBase64Encoded": "aWJt" }] }))
        }
    });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    client
        .generate("imagen-test", "a cat", Some("21:9"))
        .await
        .unwrap();

    let body = captured.lock().unwrap().take().unwrap();
    assert!(body["parameters"].get("aspectRatio").is_none());
}

#[tokio::test]
async fn test_generate_upstream_status_passes_through_with_message() {
    let upstream = Router::new().fallback(|| async {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": { "message": "model overloaded" } })),
        )
    });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let err = client
        .generate("imagen-test", "a cat", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::UpstreamStatus {
            status: 503,
            message: "model overloaded".to_string(),
        }
    );
}

#[tokio::test]
async fn test_generate_upstream_status_without_message_uses_fallback() {
    let upstream = Router::new()
        .fallback(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded".to_string()) });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let err = client
        .generate("imagen-test", "a cat", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::UpstreamStatus {
            status: 502,
            message: "Failed to generate image due to API error.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_generate_empty_predictions_is_malformed() {
    let upstream = Router::new().fallback(|| async { Json(json!({ "predictions": [] })) });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let err = client
        .generate("imagen-test", "a cat", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::MalformedResponse {
            operation: Operation::ImageGeneration,
        }
    );
}

#[tokio::test]
async fn test_generate_missing_payload_field_is_malformed() {
    let upstream = Router::new()
        .fallback(|| async { Json(json!({ "predictions": [{ "mimeType": "image/png" }] })) });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let err = client
        .generate("imagen-test", "a cat", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::MalformedResponse {
            operation: Operation::ImageGeneration,
        }
    );
}

#[tokio::test]
async fn test_generate_unreachable_is_no_response() {
    let client = GoogleClient::new("http://127.0.0.1:59999", "test-key").unwrap();
    let err = client
        .generate("imagen-test", "a cat", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProviderError::NoResponse {
            operation: Operation::ImageGeneration,
        }
    );
    assert_eq!(
        err.to_string(),
        "No response received from image generation service."
    );
}

#[tokio::test]
async fn test_remix_extracts_first_candidate_text() {
    let upstream = Router::new().fallback(|| async {
        Json(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "A majestic cat, oil on canvas" }]
                }
            }]
        }))
    });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let result = client.remix("gemini-test", "a cat").await.unwrap();

    assert_eq!(result, "A majestic cat, oil on canvas");
}

#[tokio::test]
async fn test_remix_instruction_carries_original_prompt() {
    let captured: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
    let cap = captured.clone();
    let upstream = Router::new().fallback(move |uri: Uri, Json(body): Json<Value>| {
        let cap = cap.clone();
        async move {
            *cap.lock().unwrap() = Some((uri.to_string(), body));
            Json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "rewritten" }] } }]
            }))
        }
    });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    client.remix("gemini-test", "a cat in a hat").await.unwrap();

    let (uri, body) = captured.lock().unwrap().take().unwrap();
    assert!(uri.contains("/v1beta/models/gemini-test:generateContent"));
    assert!(uri.contains("key=test-key"));
    let instruction = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(instruction.contains("a cat in a hat"));
    assert!(instruction.contains("more descriptive"));
}

#[tokio::test]
async fn test_remix_broken_chain_is_malformed() {
    // candidates present but the nested text link is missing
    let upstream = Router::new()
        .fallback(|| async { Json(json!({ "candidates": [{ "content": { "parts": [] } }] })) });
    let base = spawn_upstream(upstream).await;

    let client = GoogleClient::new(&base, "test-key").unwrap();
    let err = client.remix("gemini-test", "a cat").await.unwrap_err();

    assert_eq!(
        err,
        ProviderError::MalformedResponse {
            operation: Operation::PromptRemix,
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid response format received from prompt remix API."
    );
}

#[tokio::test]
async fn test_remix_unreachable_is_no_response() {
    let client = GoogleClient::new("http://127.0.0.1:59999", "test-key").unwrap();
    let err = client.remix("gemini-test", "a cat").await.unwrap_err();

    assert_eq!(
        err,
        ProviderError::NoResponse {
            operation: Operation::PromptRemix,
        }
    );
}
