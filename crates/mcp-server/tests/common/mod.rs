//! Shared test fixtures: a recording transport standing in for the network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alphavantage_client::{AvClient, ClientError, Transport};
use async_trait::async_trait;
use serde_json::{json, Value};

/// One recorded upstream call: the full query-string pairs.
pub type Call = Vec<(String, String)>;

pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    response: Value,
    fail_with: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Self::with_response(json!({ "Global Quote": { "05. price": "182.52" } }))
    }

    pub fn with_response(response: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
            fail_with: None,
        })
    }

    /// Every call records, then fails like an upstream API error.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Value::Null,
            fail_with: Some(message.to_string()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Call {
        self.calls.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, query: &[(String, String)]) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(query.to_vec());
        if let Some(message) = &self.fail_with {
            return Err(ClientError::Api(message.clone()));
        }
        Ok(self.response.clone())
    }
}

pub fn client_with(transport: Arc<RecordingTransport>) -> AvClient {
    AvClient::with_transport("test-key", transport)
}

/// First value recorded for a query key, if any.
pub fn param(call: &Call, key: &str) -> Option<String> {
    call.iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}
