//! Batch command - probe several ports sequentially.

use anyhow::{bail, Context, Result};
use portprobe_core::{PortProbeReport, ProbeService, ScanInvoker};

pub async fn run(invoker: ScanInvoker, address: String, ports: Vec<u16>, json: bool) -> Result<()> {
    let reports = probe(invoker, address, ports).await?;
    println!("{}", render(&reports, json)?);
    check(&reports)
}

/// Probe every port, one scanner run each, recording failures per port.
pub async fn probe(
    invoker: ScanInvoker,
    address: String,
    ports: Vec<u16>,
) -> Result<Vec<PortProbeReport>> {
    let timeout = invoker.default_timeout();
    let service = ProbeService::new(invoker).with_timeout(timeout);

    // The service blocks on each child process; keep that off the runtime thread.
    let probes = tokio::task::spawn_blocking(move || service.probe_many(&address, &ports))
        .await
        .context("Probe task panicked")?;

    Ok(probes.iter().map(PortProbeReport::from).collect())
}

/// Format reports as a table with a summary line, or as a JSON array.
pub fn render(reports: &[PortProbeReport], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }

    let mut lines = vec![
        format!("{:<6} {:<9} DETAIL", "PORT", "STATE"),
        "-".repeat(60),
    ];
    for report in reports {
        let state = report
            .state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "error".to_string());
        let detail = match (&report.payload, &report.error) {
            (Some(payload), _) => truncate(&payload.to_string(), 45),
            (None, Some(error)) => truncate(error, 45),
            (None, None) => String::new(),
        };
        lines.push(format!("{:<6} {:<9} {}", report.port, state, detail));
    }
    lines.push(format!(
        "\nTotal: {} ports, {} failed",
        reports.len(),
        failed_count(reports)
    ));
    Ok(lines.join("\n"))
}

/// Fail if any port could not be probed.
pub fn check(reports: &[PortProbeReport]) -> Result<()> {
    let failed = failed_count(reports);
    if failed > 0 {
        bail!("{} of {} probes failed", failed, reports.len());
    }
    Ok(())
}

fn failed_count(reports: &[PortProbeReport]) -> usize {
    reports.iter().filter(|r| r.error.is_some()).count()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
