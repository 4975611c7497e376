//! Port probing application service.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{PortState, ScanRequest, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use crate::ports::ScanInvokerPort;

/// Outcome of probing one port in a batch.
#[derive(Debug)]
pub struct PortProbe {
    pub port: u16,
    pub outcome: Result<Value>,
}

impl PortProbe {
    /// Interpreted state, or `None` if the probe failed.
    pub fn state(&self) -> Option<PortState> {
        self.outcome.as_ref().ok().map(PortState::from_payload)
    }
}

/// Serializable view of a [`PortProbe`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortProbeReport {
    pub port: u16,
    pub state: Option<PortState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&PortProbe> for PortProbeReport {
    fn from(probe: &PortProbe) -> Self {
        match &probe.outcome {
            Ok(payload) => Self {
                port: probe.port,
                state: Some(PortState::from_payload(payload)),
                payload: Some(payload.clone()),
                error: None,
            },
            Err(e) => Self {
                port: probe.port,
                state: None,
                payload: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Application service for probing ports through a scan invoker.
///
/// Stateless apart from the injected invoker: nothing is cached between
/// calls, and every probe issues its own scan.
pub struct ProbeService<I: ScanInvokerPort> {
    invoker: I,
    timeout_seconds: u64,
}

impl<I: ScanInvokerPort> ProbeService<I> {
    /// Create a new probe service with the given invoker.
    pub fn new(invoker: I) -> Self {
        Self {
            invoker,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the timeout forwarded with every probe.
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Scan one port and return its payload.
    ///
    /// A report without the requested port fails with `Error::MissingPort`.
    pub fn probe(&self, address: &str, port: u16) -> Result<Value> {
        let request = ScanRequest::new(address, port).with_timeout(self.timeout_seconds);
        let result = self.invoker.scan_request(&request)?;
        result.port(port).cloned()
    }

    /// Scan one port and interpret its payload.
    pub fn probe_state(&self, address: &str, port: u16) -> Result<PortState> {
        self.probe(address, port).map(|payload| PortState::from_payload(&payload))
    }

    /// Probe several ports one after another, one scan per port.
    ///
    /// A failing port is recorded and does not stop the remaining probes.
    pub fn probe_many(&self, address: &str, ports: &[u16]) -> Vec<PortProbe> {
        ports
            .iter()
            .map(|&port| {
                let outcome = self.probe(address, port);
                if let Err(e) = &outcome {
                    debug!(address, port, error = %e, "Probe failed");
                }
                PortProbe { port, outcome }
            })
            .collect()
    }
}
