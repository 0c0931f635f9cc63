//! Query construction and the HTTP transport seam.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::ClientError;

/// Outbound request timeout. Alpha Vantage analytics calls can be slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ordered query-string pairs for one Alpha Vantage call.
///
/// The first pair is always `function=<NAME>`; the API key is appended last
/// by [`crate::AvClient::call`].
#[derive(Debug, Clone)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new(function: &str) -> Self {
        Self {
            pairs: vec![("function".to_string(), function.to_string())],
        }
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Push only when the value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Push a comma-joined list, omitting the key when the list is empty.
    pub fn push_list(&mut self, key: &str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.pairs.push((key.to_string(), values.join(",")));
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// The raw GET behind every endpoint method.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, query: &[(String, String)]) -> Result<Value, ClientError>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: String) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, query: &[(String, String)]) -> Result<Value, ClientError> {
        if let Some((_, function)) = query.iter().find(|(key, _)| key == "function") {
            log::debug!("GET {} function={function}", self.base_url);
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        // CSV endpoints (listing status, calendars, datatype=csv) come back
        // as plain text; carry the body through as a JSON string.
        let value = match serde_json::from_str::<Value>(&body) {
            Ok(value) => value,
            Err(_) => return Ok(Value::String(body)),
        };

        // The API reports bad requests inside a 200 body.
        if let Some(message) = value.get("Error Message").and_then(Value::as_str) {
            return Err(ClientError::Api(message.to_string()));
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_starts_with_function() {
        let mut query = Query::new("GLOBAL_QUOTE");
        query.push("symbol", "IBM").push("datatype", "json");
        assert_eq!(
            query.pairs(),
            &[
                ("function".to_string(), "GLOBAL_QUOTE".to_string()),
                ("symbol".to_string(), "IBM".to_string()),
                ("datatype".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn push_opt_skips_absent_values() {
        let mut query = Query::new("SMA");
        query.push_opt("month", None).push_opt("month", Some("2024-01"));
        assert_eq!(query.pairs().len(), 2);
        assert_eq!(query.pairs()[1].1, "2024-01");
    }

    #[test]
    fn push_list_joins_with_commas_and_skips_empty() {
        let mut query = Query::new("NEWS_SENTIMENT");
        query.push_list("tickers", &[]);
        assert_eq!(query.pairs().len(), 1);
        query.push_list("tickers", &["AAPL".to_string(), "MSFT".to_string()]);
        assert_eq!(query.pairs()[1].1, "AAPL,MSFT");
    }
}
