//! Alpha Vantage MCP Server
//!
//! Exposes the Alpha Vantage market-data API as an MCP tool catalog:
//! clients list ~111 named tools and invoke them with JSON arguments; the
//! dispatch layer validates required parameters, fills per-tool defaults,
//! routes to the typed client, and wraps the result as one pretty-printed
//! JSON text block.

pub mod auth;
pub mod service;
pub mod tools;

pub use service::AlphaVantageService;
