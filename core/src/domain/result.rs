//! Decoded scanner report.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PortState;
use crate::error::{Error, Result};

/// Scanner report keyed by decimal port string.
///
/// Values are whatever the scanner emitted for that port and are kept as
/// opaque JSON. A report for a successful scan is expected to contain the
/// requested port; a missing key is a scanner contract violation that shows
/// up when the caller looks it up via [`ScanResult::port`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    entries: Map<String, Value>,
}

impl ScanResult {
    /// Decode a report from raw scanner output.
    ///
    /// Anything other than a single JSON object is rejected.
    pub fn from_slice(stdout: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(stdout)?)
    }

    /// Raw payload for a port, if present.
    pub fn get(&self, port: u16) -> Option<&Value> {
        self.entries.get(&port.to_string())
    }

    /// Raw payload for a key exactly as the scanner wrote it.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Payload for a port, failing with [`Error::MissingPort`] when absent.
    pub fn port(&self, port: u16) -> Result<&Value> {
        self.get(port).ok_or_else(|| Error::MissingPort {
            port: port.to_string(),
        })
    }

    /// Interpreted state for a port, if present.
    pub fn state(&self, port: u16) -> Option<PortState> {
        self.get(port).map(PortState::from_payload)
    }

    /// Numeric ports in the report, ascending. Keys that are not ports are skipped.
    pub fn ports(&self) -> Vec<u16> {
        let mut ports: Vec<u16> = self
            .entries
            .keys()
            .filter_map(|key| key.parse().ok())
            .collect();
        ports.sort_unstable();
        ports
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Map<String, Value>> for ScanResult {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
