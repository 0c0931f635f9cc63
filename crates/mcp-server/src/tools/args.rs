//! Loosely-typed argument map and its typed decode surface.
//!
//! The boundary is untyped JSON; handlers read through these accessors so
//! everything past validation is a concrete Rust value.

use alphavantage_client::ClientError;
use serde_json::{Map, Value};
use thiserror::Error;

/// Classified dispatch failures, normalized at the server boundary into one
/// error shape.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{}", missing_message(.0))]
    MissingArguments(Vec<&'static str>),

    #[error("Invalid argument: {name} must be a {expected}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
    },

    /// The fetch collaborator failed; the message passes through opaquely.
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl DispatchError {
    /// Client-side errors are invalid requests; upstream failures are not.
    pub fn is_invalid_request(&self) -> bool {
        !matches!(self, DispatchError::Upstream(_))
    }
}

fn missing_message(names: &[&'static str]) -> String {
    if names.len() == 1 {
        format!("Missing required argument: {}", names[0])
    } else {
        format!("Missing required arguments: {}", names.join(", "))
    }
}

/// Argument map for one call. `null` values are treated as absent.
pub struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    pub fn string(&self, name: &'static str) -> Result<String, DispatchError> {
        match self.get(name) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(DispatchError::InvalidArgument {
                name,
                expected: "string",
            }),
            None => Err(DispatchError::MissingArguments(vec![name])),
        }
    }

    pub fn string_or(&self, name: &str, default: &str) -> String {
        match self.get(name) {
            Some(Value::String(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    pub fn opt_string(&self, name: &str) -> Option<String> {
        match self.get(name) {
            Some(Value::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn string_array(&self, name: &'static str) -> Result<Vec<String>, DispatchError> {
        match self.get(name) {
            Some(Value::Array(values)) => decode_string_array(name, values),
            Some(_) => Err(DispatchError::InvalidArgument {
                name,
                expected: "array",
            }),
            None => Err(DispatchError::MissingArguments(vec![name])),
        }
    }

    pub fn string_array_or_empty(&self, name: &'static str) -> Result<Vec<String>, DispatchError> {
        match self.get(name) {
            Some(Value::Array(values)) => decode_string_array(name, values),
            _ => Ok(Vec::new()),
        }
    }

    pub fn u64(&self, name: &'static str) -> Result<u64, DispatchError> {
        match self.get(name) {
            Some(Value::Number(value)) => value.as_u64().ok_or(DispatchError::InvalidArgument {
                name,
                expected: "non-negative integer",
            }),
            Some(_) => Err(DispatchError::InvalidArgument {
                name,
                expected: "number",
            }),
            None => Err(DispatchError::MissingArguments(vec![name])),
        }
    }

    pub fn u64_or(&self, name: &str, default: u64) -> u64 {
        match self.get(name) {
            Some(Value::Number(value)) => value.as_u64().unwrap_or(default),
            _ => default,
        }
    }

    pub fn f64(&self, name: &'static str) -> Result<f64, DispatchError> {
        match self.get(name) {
            Some(Value::Number(value)) => value.as_f64().ok_or(DispatchError::InvalidArgument {
                name,
                expected: "number",
            }),
            Some(_) => Err(DispatchError::InvalidArgument {
                name,
                expected: "number",
            }),
            None => Err(DispatchError::MissingArguments(vec![name])),
        }
    }

    pub fn f64_or(&self, name: &str, default: f64) -> f64 {
        match self.get(name) {
            Some(Value::Number(value)) => value.as_f64().unwrap_or(default),
            _ => default,
        }
    }

    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            Some(Value::Bool(value)) => *value,
            _ => default,
        }
    }
}

fn decode_string_array(
    name: &'static str,
    values: &[Value],
) -> Result<Vec<String>, DispatchError> {
    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or(DispatchError::InvalidArgument {
                    name,
                    expected: "array of strings",
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn args(value: Value) -> ToolArgs {
        match value {
            Value::Object(map) => ToolArgs::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn defaults_fill_absent_values() {
        let args = args(json!({"symbol": "IBM"}));
        assert_eq!(args.string_or("datatype", "json"), "json");
        assert_eq!(args.u64_or("time_period", 14), 14);
        assert_eq!(args.f64_or("acceleration", 0.02), 0.02);
        assert!(args.bool_or("adjusted", true));
        assert_eq!(args.opt_string("month"), None);
    }

    #[test]
    fn present_values_win_over_defaults() {
        let args = args(json!({
            "datatype": "csv",
            "time_period": 60,
            "adjusted": false,
            "month": "2024-01",
        }));
        assert_eq!(args.string_or("datatype", "json"), "csv");
        assert_eq!(args.u64_or("time_period", 14), 60);
        assert!(!args.bool_or("adjusted", true));
        assert_eq!(args.opt_string("month").as_deref(), Some("2024-01"));
    }

    #[test]
    fn null_is_absent() {
        let args = args(json!({"month": null}));
        assert_eq!(args.opt_string("month"), None);
        assert!(args.string("month").is_err());
    }

    #[test]
    fn string_array_decodes_or_rejects() {
        let args = args(json!({"tickers": ["AAPL", "MSFT"], "bad": [1, 2]}));
        assert_eq!(args.string_array("tickers").unwrap(), vec!["AAPL", "MSFT"]);
        assert!(args.string_array("bad").is_err());
        assert_eq!(args.string_array_or_empty("absent").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn missing_messages_match_the_wire_format() {
        assert_eq!(
            DispatchError::MissingArguments(vec!["symbol"]).to_string(),
            "Missing required argument: symbol"
        );
        assert_eq!(
            DispatchError::MissingArguments(vec!["from_currency", "to_currency"]).to_string(),
            "Missing required arguments: from_currency, to_currency"
        );
    }
}
