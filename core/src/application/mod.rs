//! Application layer - Use case services.
//!
//! Services are thin orchestrators that:
//! - Accept domain types as inputs
//! - Use ports (traits) for external dependencies
//! - Return domain types as outputs

mod probe_service;

pub use probe_service::{PortProbe, PortProbeReport, ProbeService};
