//! `--print-tools` must match the catalog served over the MCP transport.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use rmcp::{service::ServiceExt, transport::TokioChildProcess};
use serde_json::Value;
use tokio::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_alphavantage-mcp");

#[tokio::test]
async fn print_tools_matches_list_tools() -> Result<()> {
    let output = Command::new(BIN)
        .arg("--print-tools")
        .output()
        .await
        .context("run alphavantage-mcp --print-tools")?;
    assert!(
        output.status.success(),
        "print-tools failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).context("decode print-tools stdout")?;
    let payload: Value = serde_json::from_str(&stdout).context("parse print-tools JSON")?;
    assert_eq!(
        payload
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        env!("CARGO_PKG_VERSION"),
        "print-tools version mismatch"
    );

    let printed_tools = payload
        .get("tools")
        .and_then(Value::as_array)
        .context("print-tools missing tools array")?;
    let printed: HashSet<String> = printed_tools
        .iter()
        .filter_map(|tool| tool.get("name").and_then(Value::as_str))
        .map(|name| name.to_string())
        .collect();
    assert_eq!(printed.len(), 111, "unexpected catalog size");

    // Listing tools never touches the upstream API, so a dummy key is fine.
    let mut cmd = Command::new(BIN);
    cmd.env("ALPHAVANTAGE_API_KEY", "demo");
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let listed: HashSet<String> = tools
        .tools
        .iter()
        .map(|tool| tool.name.as_ref().to_string())
        .collect();

    assert_eq!(printed, listed, "print-tools mismatch with list_tools");
    Ok(())
}
