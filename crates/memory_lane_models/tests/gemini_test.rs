#![cfg(feature = "gemini")]

// Gemini client tests against a local canned server, plus one live call
// gated behind the `api` feature.

mod test_utils;

use memory_lane_core::{GenerateRequest, ImageBlob, Input, Message, Output, Role};
use memory_lane_error::{MemoryLaneErrorKind, ServiceErrorKind};
use memory_lane_interface::GenerativeDriver;
use memory_lane_models::{GeminiClient, GeminiConfig};
use serde_json::json;
use test_utils::{CannedReply, CannedServer};

fn config_for(server: &CannedServer) -> GeminiConfig {
    GeminiConfig {
        base_url: server.base_url.clone(),
        rpm: None,
        retry_backoff_ms: Some(1),
        timeout_secs: 5,
        ..GeminiConfig::default()
    }
}

fn caption_request() -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            vec![
                Input::Text("Caption this".into()),
                Input::Image(ImageBlob::new("image/jpeg", vec![0xff, 0xd8, 0xff])),
            ],
        )])
        .response_schema(Some(json!({
            "type": "OBJECT",
            "properties": {"caption": {"type": "STRING"}},
            "required": ["caption"]
        })))
        .build()
        .unwrap()
}

fn reply_with(text: &str) -> CannedReply {
    CannedReply::json(
        200,
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        }),
    )
}

#[tokio::test]
async fn structured_reply_is_returned_as_json() -> anyhow::Result<()> {
    let server = CannedServer::start(vec![reply_with(r#"{"caption":"Golden hour"}"#)]).await;
    let client = GeminiClient::with_api_key("test-key", config_for(&server))?;

    let response = client.generate(&caption_request()).await?;

    assert_eq!(
        response.outputs,
        vec![Output::Json(json!({"caption": "Golden hour"}))]
    );
    assert_eq!(server.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn transient_errors_are_retried() -> anyhow::Result<()> {
    let server = CannedServer::start(vec![
        CannedReply::json(503, json!({"error": {"code": 503, "message": "overloaded"}})),
        reply_with(r#"{"caption":"Second try"}"#),
    ])
    .await;
    let client = GeminiClient::with_api_key("test-key", config_for(&server))?;

    let response = client.generate(&caption_request()).await?;

    assert_eq!(response.text(), r#"{"caption":"Second try"}"#);
    assert_eq!(server.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn client_errors_fail_without_retry() -> anyhow::Result<()> {
    let server = CannedServer::start(vec![CannedReply::json(
        400,
        json!({"error": {"code": 400, "message": "API key not valid"}}),
    )])
    .await;
    let client = GeminiClient::with_api_key("bad-key", config_for(&server))?;

    let err = client.generate(&caption_request()).await.unwrap_err();

    match err.kind() {
        MemoryLaneErrorKind::Service(e) => assert_eq!(
            e.kind,
            ServiceErrorKind::HttpError {
                status_code: 400,
                message: "API key not valid".into()
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(server.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn no_retry_gives_up_after_first_failure() -> anyhow::Result<()> {
    let server = CannedServer::start(vec![CannedReply::json(
        503,
        json!({"error": {"message": "overloaded"}}),
    )])
    .await;
    let config = GeminiConfig {
        no_retry: true,
        ..config_for(&server)
    };
    let client = GeminiClient::with_api_key("test-key", config)?;

    assert!(client.generate(&caption_request()).await.is_err());
    assert_eq!(server.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn retries_stop_at_configured_limit() -> anyhow::Result<()> {
    let server = CannedServer::start(vec![CannedReply::json(
        500,
        json!({"error": {"message": "boom"}}),
    )])
    .await;
    let config = GeminiConfig {
        max_retries: Some(2),
        ..config_for(&server)
    };
    let client = GeminiClient::with_api_key("test-key", config)?;

    assert!(client.generate(&caption_request()).await.is_err());
    assert_eq!(server.hits(), 3);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn live_gemini_text_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;
    let request = GenerateRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            vec![Input::Text("Reply with the single word: hello".into())],
        )])
        .max_tokens(Some(20))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(!response.text().trim().is_empty());
    Ok(())
}
