//! The unified tool table entry.
//!
//! One `ToolSpec` carries everything the server knows about a tool: the
//! advertised schema, the required-parameter set the dispatcher enforces,
//! and the handler that routes to the client. Listing and dispatch read the
//! same record, so a tool cannot be advertised but uncallable.

use std::future::Future;
use std::pin::Pin;

use alphavantage_client::AvClient;
use serde_json::{json, Map, Value};

use super::args::{DispatchError, ToolArgs};

pub type JsonObject = Map<String, Value>;

/// Future returned by a tool handler; borrows the client for the call.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, DispatchError>> + Send + 'a>>;

/// Per-tool routing function: typed decode, defaulting, one client call.
pub type Handler = for<'a> fn(&'a AvClient, ToolArgs) -> HandlerFuture<'a>;

/// Primitive parameter kinds accepted at the tool boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    StringArray,
}

impl ParamKind {
    pub fn schema_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::StringArray => "array",
        }
    }

    pub(crate) fn matches(self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::StringArray => value.is_array(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub handler: Handler,
}

impl ToolSpec {
    /// JSON Schema object for the MCP tool listing.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = Map::new();
        for param in self.params {
            let schema = match param.kind {
                ParamKind::StringArray => json!({
                    "type": "array",
                    "items": { "type": "string" },
                }),
                kind => json!({ "type": kind.schema_type() }),
            };
            properties.insert(param.name.to_string(), schema);
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| Value::String(param.name.to_string()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema
    }

    /// Presence and type validation, before the handler runs.
    ///
    /// Every omitted required parameter is reported in one error. A required
    /// string or array that is present but empty counts as missing; numbers
    /// and booleans are only missing when absent, so zero is a legal value.
    pub fn validate(&self, args: &ToolArgs) -> Result<(), DispatchError> {
        let missing: Vec<&'static str> = self
            .params
            .iter()
            .filter(|param| param.required && is_missing(args.get(param.name), param.kind))
            .map(|param| param.name)
            .collect();
        if !missing.is_empty() {
            return Err(DispatchError::MissingArguments(missing));
        }

        for param in self.params {
            if let Some(value) = args.get(param.name) {
                if !param.kind.matches(value) {
                    return Err(DispatchError::InvalidArgument {
                        name: param.name,
                        expected: param.kind.schema_type(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn is_missing(value: Option<&Value>, kind: ParamKind) -> bool {
    let Some(value) = value else {
        return true;
    };
    match kind {
        ParamKind::String => value.as_str().is_some_and(str::is_empty),
        ParamKind::StringArray => value.as_array().is_some_and(Vec::is_empty),
        ParamKind::Number | ParamKind::Boolean => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn noop(_client: &AvClient, _args: ToolArgs) -> HandlerFuture<'_> {
        Box::pin(async { Ok(Value::Null) })
    }

    const SPEC: ToolSpec = ToolSpec {
        name: "example",
        description: "example tool",
        params: &[
            ParamSpec::required("symbol", ParamKind::String),
            ParamSpec::required("time_period", ParamKind::Number),
            ParamSpec::optional("datatype", ParamKind::String),
            ParamSpec::optional("tickers", ParamKind::StringArray),
        ],
        handler: noop,
    };

    fn args(value: Value) -> ToolArgs {
        match value {
            Value::Object(map) => ToolArgs::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn schema_lists_required_names_in_order() {
        let schema = SPEC.input_schema();
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["required"], json!(["symbol", "time_period"]));
        assert_eq!(schema["properties"]["symbol"], json!({"type": "string"}));
        assert_eq!(
            schema["properties"]["tickers"],
            json!({"type": "array", "items": {"type": "string"}})
        );
    }

    #[test]
    fn all_missing_required_reported_together() {
        let err = SPEC.validate(&args(json!({}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required arguments: symbol, time_period"
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let err = SPEC
            .validate(&args(json!({"symbol": "", "time_period": 14})))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: symbol");
    }

    #[test]
    fn zero_number_is_present() {
        assert!(SPEC
            .validate(&args(json!({"symbol": "IBM", "time_period": 0})))
            .is_ok());
    }

    #[test]
    fn null_counts_as_missing() {
        let err = SPEC
            .validate(&args(json!({"symbol": null, "time_period": 14})))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: symbol");
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let err = SPEC
            .validate(&args(json!({"symbol": "IBM", "time_period": "14"})))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidArgument {
                name: "time_period",
                ..
            }
        ));
    }
}
