//! The tool surface: one table driving schemas, validation, defaulting, and
//! routing.

mod args;
mod dispatch;
mod registry;
mod spec;

pub use args::{DispatchError, ToolArgs};
pub use dispatch::Registry;
pub use spec::{Handler, HandlerFuture, JsonObject, ParamKind, ParamSpec, ToolSpec};

use serde_json::{json, Value};

/// Catalog inventory for `--print-tools`, shaped like the MCP listing.
pub fn tool_inventory_json(version: &str) -> Value {
    let registry = Registry::new();
    let tools: Vec<Value> = registry
        .specs()
        .iter()
        .map(|spec| json!({ "name": spec.name, "description": spec.description }))
        .collect();

    json!({
        "binary": "alphavantage-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}
