//! Scan invoker port (interface).

use crate::domain::{ScanRequest, ScanResult};
use crate::error::Result;

/// Port for running a single scan against the external scanner.
///
/// This trait defines the interface the application layer uses to obtain a
/// scanner report. The production implementation spawns a child process;
/// callers can substitute their own collaborator.
pub trait ScanInvokerPort: Send + Sync {
    /// Run one scan and return the decoded report.
    ///
    /// Blocks until the collaborator finishes. No retry, no caching.
    fn scan_request(&self, request: &ScanRequest) -> Result<ScanResult>;
}

impl<T: ScanInvokerPort + ?Sized> ScanInvokerPort for &T {
    fn scan_request(&self, request: &ScanRequest) -> Result<ScanResult> {
        (**self).scan_request(request)
    }
}
