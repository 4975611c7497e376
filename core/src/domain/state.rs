//! Best-effort interpretation of per-port payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse state of a probed port.
///
/// The payload itself stays opaque; this is a convenience view over the
/// shapes scanners commonly emit: a bare string (`"OPEN"`, `"CLOSE"`) or an
/// object with a `status` or `state` field (`{"status": "open"}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PortState {
    Open,
    Closed,
    Filtered,
    /// The payload did not carry a recognizable state.
    #[default]
    Unknown,
}

impl PortState {
    /// Interpret a scanner payload.
    pub fn from_payload(payload: &Value) -> Self {
        match payload {
            Value::String(s) => Self::parse(s),
            Value::Object(fields) => fields
                .get("status")
                .or_else(|| fields.get("state"))
                .and_then(Value::as_str)
                .map(Self::parse)
                .unwrap_or_default(),
            _ => PortState::Unknown,
        }
    }

    /// Parse a state word, ignoring case and surrounding whitespace.
    pub fn parse(word: &str) -> Self {
        match word.trim().to_lowercase().as_str() {
            "open" => PortState::Open,
            "close" | "closed" => PortState::Closed,
            "filtered" => PortState::Filtered,
            _ => PortState::Unknown,
        }
    }

    /// Short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            PortState::Open => "open",
            PortState::Closed => "closed",
            PortState::Filtered => "filtered",
            PortState::Unknown => "unknown",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PortState::Open)
    }
}

impl std::fmt::Display for PortState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
