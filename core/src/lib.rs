//! portprobe Core Library
//!
//! Client for an external port-scanning executable. Provides functionality to:
//! - Build the scanner command line for an address and port
//! - Run the scanner as a child process and capture its output
//! - Decode the JSON report into a port-keyed [`ScanResult`]
//! - Probe one or several ports and interpret their state
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Scan requests, reports and port states
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: The subprocess implementation
//! - `application`: Use case services
//!
//! # Example
//! ```no_run
//! use portprobe_core::ScanInvoker;
//!
//! let result = ScanInvoker::new().scan("google.com", 443)?;
//! println!("{}", result.port(443)?);
//! # Ok::<(), portprobe_core::Error>(())
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export domain types (primary API)
pub use domain::{PortState, ScanRequest, ScanResult, DEFAULT_TIMEOUT_SECS};

// Re-export other commonly used types
pub use adapters::ScanInvoker;
pub use application::{PortProbe, PortProbeReport, ProbeService};
pub use config::ScannerConfig;
pub use error::{Error, Result};
pub use ports::ScanInvokerPort;
