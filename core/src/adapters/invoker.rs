//! Subprocess adapter for the external port scanner.
//!
//! Runs `portScanner --addr <ADDRESS> --ports <PORT> --json --timeout <SECONDS>`,
//! waits for it to exit and decodes its standard output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, warn};

use crate::config::ScannerConfig;
use crate::domain::{ScanRequest, ScanResult};
use crate::error::{Error, Result};
use crate::ports::ScanInvokerPort;

/// Runs the external scanner as a child process.
///
/// Holds only immutable launch settings, so one invoker can be shared across
/// threads. Every call spawns exactly one child; there is no retry and no
/// caching. There is no timeout at this layer either: `--timeout` only tells
/// the scanner how long to wait per connection. Use a launcher (see
/// [`ScanInvoker::with_leading_args`]) or external process management for a
/// hard ceiling.
#[derive(Debug, Clone)]
pub struct ScanInvoker {
    program: PathBuf,
    leading_args: Vec<String>,
    default_timeout: u64,
}

impl ScanInvoker {
    /// Create an invoker for `portScanner` on the search path.
    pub fn new() -> Self {
        Self::with_program(crate::config::DEFAULT_PROGRAM)
    }

    /// Create an invoker for a specific executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            default_timeout: crate::domain::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create an invoker from explicit settings.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            program: config.program.clone(),
            leading_args: config.leading_args.clone(),
            default_timeout: config.timeout_seconds,
        })
    }

    /// Place launcher arguments between the program and the scanner flags.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the timeout used by [`ScanInvoker::scan`].
    pub fn with_default_timeout(mut self, timeout_seconds: u64) -> Self {
        self.default_timeout = timeout_seconds;
        self
    }

    /// Returns the executable this invoker spawns.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the timeout used when the caller does not pick one.
    pub fn default_timeout(&self) -> u64 {
        self.default_timeout
    }

    /// Build a request using this invoker's default timeout.
    pub fn request(&self, address: impl Into<String>, port: u16) -> ScanRequest {
        ScanRequest::new(address, port).with_timeout(self.default_timeout)
    }

    /// Full command line for a request, program first. Nothing is spawned.
    pub fn command_line(&self, request: &ScanRequest) -> Vec<String> {
        let mut line = Vec::with_capacity(1 + self.leading_args.len() + 7);
        line.push(self.program_name());
        line.extend(self.leading_args.iter().cloned());
        line.extend(request.args());
        line
    }

    /// Scan one port with the default timeout (2 seconds unless configured).
    pub fn scan(&self, address: &str, port: u16) -> Result<ScanResult> {
        self.scan_request(&self.request(address, port))
    }

    /// Scan one port with an explicit timeout forwarded to the scanner.
    pub fn scan_with_timeout(
        &self,
        address: &str,
        port: u16,
        timeout_seconds: u64,
    ) -> Result<ScanResult> {
        self.scan_request(&ScanRequest::new(address, port).with_timeout(timeout_seconds))
    }

    /// Run the scanner for a prebuilt request, blocking until it exits.
    pub fn scan_request(&self, request: &ScanRequest) -> Result<ScanResult> {
        debug!(
            program = %self.program.display(),
            address = %request.address,
            port = request.port,
            timeout = request.timeout_seconds,
            "Spawning scanner"
        );

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(request.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.launch_error(e))?;

        self.decode_output(request, output)
    }

    /// Async variant of [`ScanInvoker::scan`] for callers inside a tokio runtime.
    pub async fn scan_async(&self, address: &str, port: u16) -> Result<ScanResult> {
        self.scan_request_async(&self.request(address, port)).await
    }

    /// Async variant of [`ScanInvoker::scan_request`].
    pub async fn scan_request_async(&self, request: &ScanRequest) -> Result<ScanResult> {
        debug!(
            program = %self.program.display(),
            address = %request.address,
            port = request.port,
            timeout = request.timeout_seconds,
            "Spawning scanner (async)"
        );

        let output = tokio::process::Command::new(&self.program)
            .args(&self.leading_args)
            .args(request.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.launch_error(e))?;

        self.decode_output(request, output)
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn launch_error(&self, source: std::io::Error) -> Error {
        warn!(program = %self.program.display(), error = %source, "Failed to launch scanner");
        Error::Launch {
            program: self.program_name(),
            source,
        }
    }

    /// Map a finished process to a report or an error.
    fn decode_output(&self, request: &ScanRequest, output: Output) -> Result<ScanResult> {
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                program = %self.program.display(),
                address = %request.address,
                port = request.port,
                code = ?output.status.code(),
                "Scanner exited unsuccessfully"
            );
            return Err(Error::Execution {
                program: self.program_name(),
                code: output.status.code(),
                stderr,
            });
        }

        let result = ScanResult::from_slice(&output.stdout).inspect_err(|e| {
            warn!(
                program = %self.program.display(),
                bytes = output.stdout.len(),
                error = %e,
                "Scanner output is not a JSON object"
            );
        })?;

        debug!(
            address = %request.address,
            port = request.port,
            entries = result.len(),
            "Decoded scanner report"
        );
        Ok(result)
    }
}

impl Default for ScanInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanInvokerPort for ScanInvoker {
    fn scan_request(&self, request: &ScanRequest) -> Result<ScanResult> {
        ScanInvoker::scan_request(self, request)
    }
}
