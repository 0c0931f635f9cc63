//! Typed Alpha Vantage REST client.
//!
//! One async method per upstream endpoint (`quote`, `sma`, `fx_daily`, ...),
//! each building the `function=` query for `https://www.alphavantage.co/query`
//! and returning the parsed JSON payload. The raw GET sits behind the
//! [`Transport`] trait so callers (and tests) can swap the network out.

use std::sync::Arc;

use serde_json::Value;

mod endpoints;
mod error;
mod http;

pub use error::ClientError;
pub use http::{HttpTransport, Query, Transport};

/// Default query endpoint for all Alpha Vantage functions.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Environment variable overriding the query endpoint (primarily for tests).
pub const BASE_URL_ENV: &str = "ALPHAVANTAGE_BASE_URL";

/// Alpha Vantage API client.
///
/// Constructed once at process start and shared read-only by all concurrent
/// calls; holds no mutable state beyond the connection pool inside the
/// transport.
#[derive(Clone)]
pub struct AvClient {
    transport: Arc<dyn Transport>,
    api_key: String,
}

impl AvClient {
    /// Build a client from `ALPHAVANTAGE_API_KEY` (and an optional
    /// `ALPHAVANTAGE_BASE_URL` override).
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, base_url)
    }

    /// Build a client with an explicit key and endpoint over HTTP.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(base_url.into())?;
        Ok(Self::with_transport(api_key, Arc::new(transport)))
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    /// Execute one query, appending the API key.
    pub(crate) async fn call(&self, mut query: Query) -> Result<Value, ClientError> {
        query.push("apikey", &self.api_key);
        self.transport.get(query.pairs()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct CaptureTransport {
        seen: Mutex<Vec<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl Transport for CaptureTransport {
        async fn get(&self, query: &[(String, String)]) -> Result<Value, ClientError> {
            self.seen.lock().unwrap().push(query.to_vec());
            Ok(json!({ "ok": true }))
        }
    }

    #[tokio::test]
    async fn api_key_is_appended_last() {
        let transport = Arc::new(CaptureTransport {
            seen: Mutex::new(Vec::new()),
        });
        let client = AvClient::with_transport("secret", transport.clone());

        client.quote("IBM", "json").await.unwrap();

        let seen = transport.seen.lock().unwrap();
        let call = &seen[0];
        assert_eq!(call.first().unwrap().1, "GLOBAL_QUOTE");
        assert_eq!(
            call.last().unwrap(),
            &("apikey".to_string(), "secret".to_string())
        );
    }

    #[tokio::test]
    async fn optional_month_is_omitted_from_the_wire() {
        let transport = Arc::new(CaptureTransport {
            seen: Mutex::new(Vec::new()),
        });
        let client = AvClient::with_transport("secret", transport.clone());

        client
            .sma("IBM", "daily", None, 20, "close", "json")
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert!(!seen[0].iter().any(|(key, _)| key == "month"));
    }
}
