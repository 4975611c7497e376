//! Domain layer - Pure data models for scan requests and scanner reports.
//!
//! These types have no I/O dependencies and can be tested in isolation.

mod request;
mod result;
mod state;

// Re-export all domain types
pub use request::{ScanRequest, DEFAULT_TIMEOUT_SECS};
pub use result::ScanResult;
pub use state::PortState;
