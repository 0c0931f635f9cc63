//! Tool registry and the single dispatch entry point.

use std::collections::HashMap;

use alphavantage_client::AvClient;
use serde_json::Value;

use super::args::{DispatchError, ToolArgs};
use super::registry;
use super::spec::{JsonObject, ToolSpec};

/// The unified tool table: declaration-ordered specs plus a name index.
///
/// Built once at startup by plain construction (no lazy global); shared
/// read-only by every in-flight call.
pub struct Registry {
    specs: Vec<ToolSpec>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        let specs = registry::all();
        let mut index = HashMap::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            let previous = index.insert(spec.name, position);
            assert!(previous.is_none(), "duplicate tool name: {}", spec.name);
        }
        Self { specs, index }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Full catalog, in stable declaration order.
    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|position| &self.specs[*position])
    }

    /// Validate and execute one tool call.
    ///
    /// Lookup, required/type validation, defaulting, and routing in order;
    /// a validation failure returns before the client is touched. No lock
    /// is held across the await, so concurrent calls never interfere and
    /// cancellation propagates by dropping the returned future.
    pub async fn dispatch(
        &self,
        client: &AvClient,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<Value, DispatchError> {
        let spec = self
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;
        let args = ToolArgs::new(arguments.unwrap_or_default());
        spec.validate(&args)?;
        (spec.handler)(client, args).await
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_tool_name_is_unique() {
        let registry = Registry::new();
        let names: HashSet<&str> = registry.specs().iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn catalog_order_is_stable_across_builds() {
        let first: Vec<&str> = Registry::new().specs().iter().map(|s| s.name).collect();
        let second: Vec<&str> = Registry::new().specs().iter().map(|s| s.name).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_listed_tool_is_dispatchable() {
        let registry = Registry::new();
        for spec in registry.specs() {
            assert!(registry.get(spec.name).is_some(), "{} not indexed", spec.name);
        }
    }
}
