//! Dispatch behavior: lookup, required checks, defaulting, and routing,
//! observed at the wire (the recorded query pairs).

mod common;

use alphavantage_mcp::tools::{DispatchError, ParamKind, Registry};
use common::{client_with, param, RecordingTransport};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

fn args(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => unreachable!("test arguments must be objects"),
    }
}

#[tokio::test]
async fn stock_quote_routes_with_defaulted_datatype() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    registry
        .dispatch(&client, "stock_quote", args(json!({ "symbol": "IBM" })))
        .await
        .unwrap();

    assert_eq!(transport.call_count(), 1);
    let call = transport.last_call();
    assert_eq!(param(&call, "function").as_deref(), Some("GLOBAL_QUOTE"));
    assert_eq!(param(&call, "symbol").as_deref(), Some("IBM"));
    assert_eq!(param(&call, "datatype").as_deref(), Some("json"));
    assert_eq!(param(&call, "apikey").as_deref(), Some("test-key"));
}

#[tokio::test]
async fn macd_fills_macd_family_defaults() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    registry
        .dispatch(
            &client,
            "macd",
            args(json!({ "symbol": "IBM", "interval": "daily", "series_type": "close" })),
        )
        .await
        .unwrap();

    let call = transport.last_call();
    assert_eq!(param(&call, "function").as_deref(), Some("MACD"));
    assert_eq!(param(&call, "fastperiod").as_deref(), Some("12"));
    assert_eq!(param(&call, "slowperiod").as_deref(), Some("26"));
    assert_eq!(param(&call, "signalperiod").as_deref(), Some("9"));
    assert_eq!(param(&call, "datatype").as_deref(), Some("json"));
}

#[tokio::test]
async fn missing_required_never_reaches_the_collaborator() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let error = registry
        .dispatch(&client, "stock_quote", args(json!({})))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Missing required argument: symbol");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn unknown_tool_is_rejected_before_routing() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let error = registry
        .dispatch(&client, "frobnicate", args(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(error, DispatchError::UnknownTool(_)));
    assert_eq!(error.to_string(), "Unknown tool: frobnicate");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn only_actually_omitted_names_are_reported() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let error = registry
        .dispatch(
            &client,
            "exchange_rate",
            args(json!({ "from_currency": "USD" })),
        )
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Missing required argument: to_currency");

    let error = registry
        .dispatch(&client, "exchange_rate", args(json!({})))
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Missing required arguments: from_currency, to_currency"
    );
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn identical_calls_invoke_the_collaborator_each_time() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    for _ in 0..2 {
        registry
            .dispatch(&client, "stock_quote", args(json!({ "symbol": "IBM" })))
            .await
            .unwrap();
    }

    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn upstream_failures_pass_through_opaquely() {
    let transport = RecordingTransport::failing("Invalid API call.");
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let error = registry
        .dispatch(&client, "stock_quote", args(json!({ "symbol": "IBM" })))
        .await
        .unwrap_err();

    assert!(matches!(error, DispatchError::Upstream(_)));
    assert!(error.to_string().contains("Invalid API call."));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn wrong_argument_type_is_rejected_before_routing() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let error = registry
        .dispatch(&client, "stock_quote", args(json!({ "symbol": 42 })))
        .await
        .unwrap_err();

    assert!(matches!(error, DispatchError::InvalidArgument { .. }));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn empty_required_string_and_array_count_as_missing() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let error = registry
        .dispatch(&client, "stock_quote", args(json!({ "symbol": "" })))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Missing required argument: symbol");

    let error = registry
        .dispatch(
            &client,
            "realtime_bulk_quotes",
            args(json!({ "symbols": [] })),
        )
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Missing required argument: symbols");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn zero_valued_required_numbers_are_accepted() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    registry
        .dispatch(
            &client,
            "sma",
            args(json!({
                "symbol": "IBM",
                "interval": "daily",
                "time_period": 0,
                "series_type": "close",
            })),
        )
        .await
        .unwrap();

    assert_eq!(param(&transport.last_call(), "time_period").as_deref(), Some("0"));
}

#[tokio::test]
async fn indicator_defaults_match_the_documented_table() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    let base = json!({ "symbol": "IBM", "interval": "daily" });
    let with_series = json!({ "symbol": "IBM", "interval": "daily", "series_type": "close" });

    registry
        .dispatch(&client, "rsi", args(with_series.clone()))
        .await
        .unwrap();
    assert_eq!(param(&transport.last_call(), "time_period").as_deref(), Some("14"));

    registry
        .dispatch(&client, "trix", args(with_series.clone()))
        .await
        .unwrap();
    assert_eq!(param(&transport.last_call(), "time_period").as_deref(), Some("30"));

    registry
        .dispatch(&client, "mom", args(with_series.clone()))
        .await
        .unwrap();
    assert_eq!(param(&transport.last_call(), "time_period").as_deref(), Some("10"));

    registry
        .dispatch(&client, "cci", args(base.clone()))
        .await
        .unwrap();
    assert_eq!(param(&transport.last_call(), "time_period").as_deref(), Some("20"));

    registry
        .dispatch(&client, "stoch", args(base.clone()))
        .await
        .unwrap();
    let call = transport.last_call();
    assert_eq!(param(&call, "fastkperiod").as_deref(), Some("5"));
    assert_eq!(param(&call, "slowkperiod").as_deref(), Some("3"));
    assert_eq!(param(&call, "slowdperiod").as_deref(), Some("3"));
    assert_eq!(param(&call, "slowkmatype").as_deref(), Some("0"));

    registry
        .dispatch(&client, "sar", args(base.clone()))
        .await
        .unwrap();
    let call = transport.last_call();
    assert_eq!(param(&call, "acceleration").as_deref(), Some("0.02"));
    assert_eq!(param(&call, "maximum").as_deref(), Some("0.2"));

    registry
        .dispatch(&client, "adosc", args(base.clone()))
        .await
        .unwrap();
    let call = transport.last_call();
    assert_eq!(param(&call, "fastperiod").as_deref(), Some("3"));
    assert_eq!(param(&call, "slowperiod").as_deref(), Some("10"));

    registry
        .dispatch(&client, "bbands", args(with_series))
        .await
        .unwrap();
    let call = transport.last_call();
    assert_eq!(param(&call, "time_period").as_deref(), Some("20"));
    assert_eq!(param(&call, "nbdevup").as_deref(), Some("2"));
    assert_eq!(param(&call, "nbdevdn").as_deref(), Some("2"));
    assert_eq!(param(&call, "matype").as_deref(), Some("0"));

    registry.dispatch(&client, "ultosc", args(base)).await.unwrap();
    let call = transport.last_call();
    assert_eq!(param(&call, "timeperiod1").as_deref(), Some("7"));
    assert_eq!(param(&call, "timeperiod2").as_deref(), Some("14"));
    assert_eq!(param(&call, "timeperiod3").as_deref(), Some("28"));
}

#[tokio::test]
async fn weekly_digital_currency_routes_to_the_weekly_endpoint() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    registry
        .dispatch(
            &client,
            "digital_currency_weekly",
            args(json!({ "symbol": "BTC", "market": "EUR" })),
        )
        .await
        .unwrap();

    assert_eq!(
        param(&transport.last_call(), "function").as_deref(),
        Some("DIGITAL_CURRENCY_WEEKLY")
    );
}

#[tokio::test]
async fn sliding_window_forwards_window_size() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    registry
        .dispatch(
            &client,
            "analytics_sliding_window",
            args(json!({
                "symbols": ["AAPL", "IBM"],
                "series_range": "6month",
                "interval": "DAILY",
                "calculations": ["MEAN", "STDDEV"],
                "window_size": 20,
            })),
        )
        .await
        .unwrap();

    let call = transport.last_call();
    assert_eq!(param(&call, "WINDOW_SIZE").as_deref(), Some("20"));
    assert_eq!(param(&call, "SYMBOLS").as_deref(), Some("AAPL,IBM"));
    assert_eq!(param(&call, "CALCULATIONS").as_deref(), Some("MEAN,STDDEV"));
    assert_eq!(param(&call, "OHLC").as_deref(), Some("close"));
}

/// Spec-wide sweep: every tool, called with only its required parameters,
/// must route to the collaborator with the shared defaults filled in and no
/// stray `month` parameter.
#[tokio::test]
async fn every_tool_routes_with_required_arguments_only() {
    let transport = RecordingTransport::new();
    let client = client_with(transport.clone());
    let registry = Registry::new();

    for spec in registry.specs() {
        let mut arguments = Map::new();
        for param_spec in spec.params.iter().filter(|p| p.required) {
            let value = match param_spec.kind {
                ParamKind::String => json!("daily"),
                ParamKind::Number => json!(7),
                ParamKind::Boolean => json!(true),
                ParamKind::StringArray => json!(["IBM"]),
            };
            arguments.insert(param_spec.name.to_string(), value);
        }

        let before = transport.call_count();
        registry
            .dispatch(&client, spec.name, Some(arguments))
            .await
            .unwrap_or_else(|error| panic!("{} failed: {error}", spec.name));
        assert_eq!(transport.call_count(), before + 1, "{}", spec.name);

        let call = transport.last_call();
        assert_eq!(
            param(&call, "apikey").as_deref(),
            Some("test-key"),
            "{} lost the api key",
            spec.name
        );
        assert!(param(&call, "function").is_some(), "{}", spec.name);

        let optional = |name: &str| {
            spec.params
                .iter()
                .any(|p| p.name == name && !p.required)
        };
        if optional("datatype") {
            assert_eq!(param(&call, "datatype").as_deref(), Some("json"), "{}", spec.name);
        }
        if optional("outputsize") {
            assert_eq!(param(&call, "outputsize").as_deref(), Some("compact"), "{}", spec.name);
        }
        if optional("interval") {
            assert_eq!(param(&call, "interval").as_deref(), Some("monthly"), "{}", spec.name);
        }
        if optional("maturity") {
            assert_eq!(param(&call, "maturity").as_deref(), Some("10year"), "{}", spec.name);
        }
        if optional("contract") {
            assert_eq!(param(&call, "contract").as_deref(), Some("all"), "{}", spec.name);
        }
        if optional("sort") {
            assert_eq!(param(&call, "sort").as_deref(), Some("LATEST"), "{}", spec.name);
        }
        if optional("limit") {
            assert_eq!(param(&call, "limit").as_deref(), Some("50"), "{}", spec.name);
        }
        if optional("month") {
            assert_eq!(param(&call, "month"), None, "{}", spec.name);
        }
    }
}
