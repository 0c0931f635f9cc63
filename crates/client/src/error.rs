use thiserror::Error;

/// Failures raised by the Alpha Vantage client.
///
/// Opaque to the dispatch layer, which forwards the message unchanged.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No API key configured.
    #[error("missing API key: set ALPHAVANTAGE_API_KEY")]
    MissingApiKey,

    /// Transport-level failure (connect, timeout, non-2xx status).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Alpha Vantage returned an error payload (bad symbol, bad function).
    #[error("Alpha Vantage error: {0}")]
    Api(String),

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
