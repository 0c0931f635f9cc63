//! The MCP binding: `ServerHandler` over the unified tool registry.

use std::sync::Arc;

use alphavantage_client::AvClient;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
    ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;

use crate::auth::Authenticator;
use crate::tools::{DispatchError, JsonObject, Registry};

/// Fixed marker on every failed call, regardless of the internal cause.
pub const ERROR_PREFIX: &str = "Error processing alphavantage query";

/// Alpha Vantage MCP service.
///
/// The client and registry are built once at startup and shared read-only
/// across calls; the service holds no per-call state.
pub struct AlphaVantageService {
    client: AvClient,
    registry: Registry,
    authenticator: Option<Arc<dyn Authenticator>>,
}

impl AlphaVantageService {
    pub fn new(client: AvClient) -> Self {
        Self {
            client,
            registry: Registry::new(),
            authenticator: None,
        }
    }

    /// Enable the pre-dispatch authentication check.
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render the catalog as MCP tool descriptors, in registry order.
    pub fn tool_listing(&self) -> Vec<Tool> {
        self.registry
            .specs()
            .iter()
            .map(|spec| Tool::new(spec.name, spec.description, Arc::new(spec.input_schema())))
            .collect()
    }

    /// Execute one call: auth gate, dispatch, envelope, error normalization.
    ///
    /// Failures reject the call with one uniform error shape; no partial
    /// result is ever returned.
    pub async fn handle_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(authenticator) = &self.authenticator {
            let verdict = authenticator.authenticate(name, None).await;
            if !verdict.authenticated {
                let reason = verdict
                    .reason
                    .unwrap_or_else(|| "not authenticated".to_string());
                log::warn!("rejected call to {name}: {reason}");
                return Err(McpError::invalid_request(
                    format!("{ERROR_PREFIX}: {reason}"),
                    None,
                ));
            }
        }

        let value = self
            .registry
            .dispatch(&self.client, name, arguments)
            .await
            .map_err(|error| {
                log::debug!("call to {name} failed: {error}");
                dispatch_error(error)
            })?;

        let text = serde_json::to_string_pretty(&value)
            .map_err(|error| McpError::internal_error(format!("{ERROR_PREFIX}: {error}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

fn dispatch_error(error: DispatchError) -> McpError {
    let message = format!("{ERROR_PREFIX}: {error}");
    if error.is_invalid_request() {
        McpError::invalid_params(message, None)
    } else {
        McpError::internal_error(message, None)
    }
}

impl ServerHandler for AlphaVantageService {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_listing(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_call(&request.name, request.arguments).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Alpha Vantage market data for AI agents: {} tools covering quotes and time \
                 series, options, news and analytics, fundamentals, FX, crypto, commodities, \
                 economic indicators, and technical indicators. Arguments are validated per \
                 tool; omitted optional parameters use the documented defaults.",
                self.registry.len()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
