//! Scan command - run the scanner for one port and print its entry.

use anyhow::{Context, Result};
use portprobe_core::{PortState, ScanInvoker};
use serde_json::Value;

pub async fn run(invoker: &ScanInvoker, address: &str, port: u16, json: bool) -> Result<()> {
    let payload = lookup(invoker, address, port).await?;
    println!("{}", render(port, &payload, json)?);
    Ok(())
}

/// Scan one port and pull its entry out of the report.
///
/// A report without the requested port is an error.
pub async fn lookup(invoker: &ScanInvoker, address: &str, port: u16) -> Result<Value> {
    let request = invoker.request(address, port);
    let result = invoker
        .scan_request_async(&request)
        .await
        .with_context(|| format!("Scan of {} failed", request))?;

    let payload = result
        .port(port)
        .with_context(|| format!("Scanner did not report on {}:{}", address, port))?;
    Ok(payload.clone())
}

/// Format one port entry as pretty JSON or a one-row table.
pub fn render(port: u16, payload: &Value, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(payload)?);
    }

    Ok(format!(
        "{:<6} {:<9} PAYLOAD\n{:<6} {:<9} {}",
        "PORT",
        "STATE",
        port,
        PortState::from_payload(payload),
        payload
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::stub_invoker;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lookup_returns_entry() {
        let dir = TempDir::new().unwrap();
        let invoker = stub_invoker(&dir, r#"printf '%s' '{"443": {"status": "open"}}'"#);

        let payload = lookup(&invoker, "x", 443).await.unwrap();
        assert_eq!(payload, json!({"status": "open"}));
    }

    #[tokio::test]
    async fn test_lookup_fails_when_port_is_missing() {
        let dir = TempDir::new().unwrap();
        let invoker = stub_invoker(&dir, r#"printf '%s' '{"80": {}}'"#);

        let err = lookup(&invoker, "x", 443).await.unwrap_err();
        let core_err = err.downcast_ref::<portprobe_core::Error>().unwrap();
        assert!(core_err.is_missing_port());
        assert!(err.to_string().contains("x:443"));
    }

    #[tokio::test]
    async fn test_lookup_fails_on_scanner_exit() {
        let dir = TempDir::new().unwrap();
        let invoker = stub_invoker(&dir, "exit 3");

        let err = lookup(&invoker, "x", 443).await.unwrap_err();
        let core_err = err.downcast_ref::<portprobe_core::Error>().unwrap();
        assert!(core_err.is_execution());
    }

    #[test]
    fn test_render_table() {
        let out = render(443, &json!("OPEN"), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("PORT"));
        assert_eq!(lines[1], r#"443    open      "OPEN""#);
    }

    #[test]
    fn test_render_json() {
        let out = render(443, &json!({"status": "open"}), true).unwrap();
        let back: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(back, json!({"status": "open"}));
    }
}
