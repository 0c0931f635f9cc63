//! Catalog properties: the advertised listing is exactly the dispatchable
//! surface, with schemas a client can build a valid call from.

mod common;

use std::collections::HashSet;

use alphavantage_mcp::AlphaVantageService;
use common::{client_with, RecordingTransport};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn service() -> AlphaVantageService {
    AlphaVantageService::new(client_with(RecordingTransport::new()))
}

#[test]
fn catalog_has_the_expected_inventory() {
    let service = service();
    let names: Vec<&str> = service
        .registry()
        .specs()
        .iter()
        .map(|spec| spec.name)
        .collect();

    assert_eq!(names.len(), 111);

    for expected in [
        "stock_quote",
        "time_series_intraday",
        "realtime_bulk_quotes",
        "news_sentiment",
        "analytics_sliding_window",
        "company_overview",
        "exchange_rate",
        "crypto_intraday",
        "wti_crude_oil",
        "treasury_yield",
        "sma",
        "tema",
        "vwap",
        "macdext",
        "ht_phasor",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    let unique: HashSet<&&str> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn listing_mirrors_the_registry_in_order() {
    let service = service();
    let listed: Vec<String> = service
        .tool_listing()
        .iter()
        .map(|tool| tool.name.to_string())
        .collect();
    let registered: Vec<String> = service
        .registry()
        .specs()
        .iter()
        .map(|spec| spec.name.to_string())
        .collect();
    assert_eq!(listed, registered);
}

#[test]
fn every_schema_is_a_complete_object() {
    let service = service();
    for tool in service.tool_listing() {
        let schema = &*tool.input_schema;
        assert_eq!(
            schema.get("type").and_then(Value::as_str),
            Some("object"),
            "{}",
            tool.name
        );

        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or_else(|| panic!("{} has no properties", tool.name));
        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .unwrap_or_else(|| panic!("{} has no required array", tool.name));

        // Every required name must be a declared property.
        for name in required {
            let name = name.as_str().unwrap();
            assert!(properties.contains_key(name), "{}: {name}", tool.name);
        }
    }
}

#[test]
fn advertised_required_matches_what_dispatch_enforces() {
    let service = service();
    for spec in service.registry().specs() {
        let schema = spec.input_schema();
        let advertised: Vec<String> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|value| value.as_str().unwrap().to_string())
            .collect();
        let enforced: Vec<String> = spec
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name.to_string())
            .collect();
        assert_eq!(advertised, enforced, "{}", spec.name);
    }
}

#[test]
fn descriptions_are_short_and_present() {
    let service = service();
    for spec in service.registry().specs() {
        assert!(!spec.description.is_empty(), "{}", spec.name);
        assert!(spec.description.len() < 120, "{}", spec.name);
    }
}
