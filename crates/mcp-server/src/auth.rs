//! Optional pre-dispatch authentication seam.
//!
//! The server never inspects credentials itself; a deployment that fronts
//! the dispatch core with bearer-token auth plugs its check in here and the
//! verdict's reason (e.g. "Insufficient scopes") is surfaced as the call
//! failure message.

use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct AuthVerdict {
    pub authenticated: bool,
    pub reason: Option<String>,
}

impl AuthVerdict {
    pub fn allow() -> Self {
        Self {
            authenticated: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            reason: Some(reason.into()),
        }
    }
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, tool: &str, session_id: Option<&str>) -> AuthVerdict;
}
