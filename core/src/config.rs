//! Scanner invocation settings.
//!
//! Nothing is read from disk or the environment here. Embedding applications
//! can deserialize a [`ScannerConfig`] from their own configuration and pass
//! it explicitly to [`crate::ScanInvoker::from_config`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_TIMEOUT_SECS;
use crate::error::{Error, Result};

/// Program name used when none is configured, resolved through the search path.
pub const DEFAULT_PROGRAM: &str = "portScanner";

/// How to launch the external scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Executable to spawn.
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// Arguments placed between the program and the scanner flags.
    ///
    /// Lets the scanner run under a launcher, e.g. program `timeout` with
    /// leading args `["10", "portScanner"]` for a hard process ceiling.
    #[serde(default, rename = "leadingArgs")]
    pub leading_args: Vec<String>,

    /// Timeout forwarded with `--timeout` when a caller does not pick one.
    #[serde(default = "default_timeout", rename = "timeoutSeconds")]
    pub timeout_seconds: u64,
}

fn default_program() -> PathBuf {
    PathBuf::from(DEFAULT_PROGRAM)
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            leading_args: Vec::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the executable to spawn.
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the launcher arguments placed before the scanner flags.
    pub fn leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the default timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Check the settings can produce a command line.
    pub fn validate(&self) -> Result<()> {
        if self.program.as_os_str().is_empty() {
            return Err(Error::Config("Scanner program must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScannerConfig::default();
        assert_eq!(config.program, PathBuf::from("portScanner"));
        assert!(config.leading_args.is_empty());
        assert_eq!(config.timeout_seconds, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ScannerConfig =
            serde_json::from_str(r#"{"program": "/opt/bin/portScanner"}"#).unwrap();
        assert_eq!(config.program, PathBuf::from("/opt/bin/portScanner"));
        assert_eq!(config.timeout_seconds, 2);

        let config: ScannerConfig = serde_json::from_str(
            r#"{"program": "timeout", "leadingArgs": ["10", "portScanner"], "timeoutSeconds": 5}"#,
        )
        .unwrap();
        assert_eq!(config.leading_args, vec!["10", "portScanner"]);
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_builder() {
        let config = ScannerConfig::new()
            .program("sh")
            .leading_args(["stub.sh"])
            .timeout_seconds(9);
        assert_eq!(config.program, PathBuf::from("sh"));
        assert_eq!(config.leading_args, vec!["stub.sh".to_string()]);
        assert_eq!(config.timeout_seconds, 9);
    }

    #[test]
    fn test_empty_program_rejected() {
        let err = ScannerConfig::new().program("").validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
