//! Error types for the portprobe-core library.

use thiserror::Error;

/// Result type alias for portprobe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while invoking the external scanner or reading its report.
#[derive(Error, Debug)]
pub enum Error {
    /// The scanner executable could not be started (missing, not executable, denied).
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The scanner started but exited unsuccessfully.
    #[error("{program} exited with {}", exit_description(.code, .stderr))]
    Execution {
        program: String,
        /// Exit code, or `None` when the process was terminated by a signal.
        code: Option<i32>,
        stderr: String,
    },

    /// The scanner's standard output is not a JSON object.
    #[error("Failed to decode scanner output: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded report has no entry for the requested port.
    #[error("Scanner report has no entry for port {port}")]
    MissingPort { port: String },

    /// Invalid scanner configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if the scanner could not be started.
    pub fn is_launch(&self) -> bool {
        matches!(self, Error::Launch { .. })
    }

    /// Returns true if the scanner exited with a failure status.
    pub fn is_execution(&self) -> bool {
        matches!(self, Error::Execution { .. })
    }

    /// Returns true if the scanner output could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Returns true if a port lookup found no entry.
    pub fn is_missing_port(&self) -> bool {
        matches!(self, Error::MissingPort { .. })
    }
}

fn exit_description(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_display() {
        let err = Error::Execution {
            program: "portScanner".to_string(),
            code: Some(1),
            stderr: "Wrong range syntax.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "portScanner exited with status 1: Wrong range syntax."
        );

        let killed = Error::Execution {
            program: "portScanner".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(
            killed.to_string(),
            "portScanner exited with no status (terminated by signal)"
        );
    }

    #[test]
    fn test_execution_display_without_stderr() {
        let err = Error::Execution {
            program: "/bin/sh".to_string(),
            code: Some(3),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "/bin/sh exited with status 3");
    }

    #[test]
    fn test_predicates_are_exclusive() {
        let launch = Error::Launch {
            program: "portScanner".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(launch.is_launch());
        assert!(!launch.is_execution() && !launch.is_decode() && !launch.is_missing_port());

        let decode: Error = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(decode.is_decode());
        assert!(!decode.is_launch());

        let missing = Error::MissingPort { port: "443".to_string() };
        assert!(missing.is_missing_port());
        assert!(!missing.is_decode());
    }
}
