//! The result envelope and the uniform error boundary, exercised through the
//! service layer (what the MCP transport sees).

mod common;

use std::sync::Arc;

use alphavantage_mcp::auth::{AuthVerdict, Authenticator};
use alphavantage_mcp::service::ERROR_PREFIX;
use alphavantage_mcp::AlphaVantageService;
use async_trait::async_trait;
use common::{client_with, RecordingTransport};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

fn args(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn success_envelope_is_one_lossless_text_block() {
    let payload = json!({
        "Meta Data": { "2. Symbol": "IBM" },
        "Time Series (Daily)": {
            "2025-08-05": { "4. close": "182.52", "5. volume": "3422910" },
        },
    });
    let transport = RecordingTransport::with_response(payload.clone());
    let service = AlphaVantageService::new(client_with(transport));

    let result = service
        .handle_call("time_series_daily", args(json!({ "symbol": "IBM" })))
        .await
        .unwrap();

    assert_eq!(result.content.len(), 1);
    let text = &result
        .content
        .first()
        .and_then(|content| content.as_text())
        .expect("text content")
        .text;
    // Pretty-printed with two-space indentation, parsing back to the exact
    // collaborator payload.
    assert!(text.contains("\n  \"Meta Data\""));
    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed, payload);
}

#[tokio::test]
async fn unknown_tool_rejects_with_the_uniform_marker() {
    let service = AlphaVantageService::new(client_with(RecordingTransport::new()));

    let error = service.handle_call("frobnicate", None).await.unwrap_err();

    assert_eq!(
        error.message.as_ref(),
        "Error processing alphavantage query: Unknown tool: frobnicate"
    );
}

#[tokio::test]
async fn validation_failures_reject_with_the_uniform_marker() {
    let service = AlphaVantageService::new(client_with(RecordingTransport::new()));

    let error = service
        .handle_call("exchange_rate", args(json!({ "from_currency": "USD" })))
        .await
        .unwrap_err();

    assert_eq!(
        error.message.as_ref(),
        "Error processing alphavantage query: Missing required argument: to_currency"
    );
}

#[tokio::test]
async fn upstream_failures_reject_with_the_uniform_marker() {
    let transport = RecordingTransport::failing("rate limit reached");
    let service = AlphaVantageService::new(client_with(transport));

    let error = service
        .handle_call("stock_quote", args(json!({ "symbol": "IBM" })))
        .await
        .unwrap_err();

    assert!(error.message.starts_with(ERROR_PREFIX));
    assert!(error.message.contains("rate limit reached"));
}

struct DenyAll;

#[async_trait]
impl Authenticator for DenyAll {
    async fn authenticate(&self, _tool: &str, _session_id: Option<&str>) -> AuthVerdict {
        AuthVerdict::deny("Insufficient scopes")
    }
}

struct AllowAll;

#[async_trait]
impl Authenticator for AllowAll {
    async fn authenticate(&self, _tool: &str, _session_id: Option<&str>) -> AuthVerdict {
        AuthVerdict::allow()
    }
}

#[tokio::test]
async fn denied_auth_short_circuits_before_dispatch() {
    let transport = RecordingTransport::new();
    let service = AlphaVantageService::new(client_with(transport.clone()))
        .with_authenticator(Arc::new(DenyAll));

    let error = service
        .handle_call("stock_quote", args(json!({ "symbol": "IBM" })))
        .await
        .unwrap_err();

    assert!(error.message.contains("Insufficient scopes"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn allowed_auth_dispatches_normally() {
    let transport = RecordingTransport::new();
    let service = AlphaVantageService::new(client_with(transport.clone()))
        .with_authenticator(Arc::new(AllowAll));

    service
        .handle_call("stock_quote", args(json!({ "symbol": "IBM" })))
        .await
        .unwrap();

    assert_eq!(transport.call_count(), 1);
}
