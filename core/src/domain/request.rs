//! Scan request and scanner argument construction.

use serde::{Deserialize, Serialize};

/// Timeout forwarded to the scanner when the caller does not pick one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// A single-port scan request.
///
/// Built fresh for every call. Nothing here is validated: the scanner owns
/// address and port validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    /// Hostname or IP literal.
    pub address: String,

    /// Port to probe.
    pub port: u16,

    /// Per-connection timeout the scanner should apply, in seconds.
    pub timeout_seconds: u64,
}

impl ScanRequest {
    /// Create a request with the default timeout.
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the timeout forwarded to the scanner.
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// The key under which the scanner reports this port (e.g. "443").
    pub fn port_key(&self) -> String {
        self.port.to_string()
    }

    /// Scanner flags for this request.
    ///
    /// Produces: `--addr <address> --ports <port> --json --timeout <seconds>`
    pub fn args(&self) -> Vec<String> {
        vec![
            "--addr".to_string(),
            self.address.clone(),
            "--ports".to_string(),
            self.port_key(),
            "--json".to_string(),
            "--timeout".to_string(),
            self.timeout_seconds.to_string(),
        ]
    }
}

impl std::fmt::Display for ScanRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} (timeout {}s)",
            self.address, self.port, self.timeout_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let request = ScanRequest::new("google.com", 443);
        assert_eq!(request.timeout_seconds, 2);
        assert_eq!(request.port_key(), "443");
    }

    #[test]
    fn test_args_match_scanner_flags() {
        let request = ScanRequest::new("google.com", 443);
        assert_eq!(
            request.args(),
            vec!["--addr", "google.com", "--ports", "443", "--json", "--timeout", "2"]
        );
    }

    #[test]
    fn test_args_carry_supplied_values() {
        let cases = [("10.0.0.1", 1, 1), ("::1", 65535, 30), ("scanme.nmap.org", 22, 75)];

        for (address, port, timeout) in cases {
            let args = ScanRequest::new(address, port).with_timeout(timeout).args();
            assert_eq!(args.len(), 7);

            let flags: Vec<&str> = args
                .iter()
                .filter(|a| a.starts_with("--"))
                .map(String::as_str)
                .collect();
            assert_eq!(flags, ["--addr", "--ports", "--json", "--timeout"]);

            assert_eq!(args[1], address);
            assert_eq!(args[3], port.to_string());
            assert_eq!(args[6], timeout.to_string());
        }
    }

    #[test]
    fn test_address_is_passed_verbatim() {
        // Validation belongs to the scanner, so even odd input goes through untouched.
        let args = ScanRequest::new(" odd host ", 0).args();
        assert_eq!(args[1], " odd host ");
        assert_eq!(args[3], "0");
    }

    #[test]
    fn test_display() {
        let request = ScanRequest::new("127.0.0.1", 8080).with_timeout(5);
        assert_eq!(request.to_string(), "127.0.0.1:8080 (timeout 5s)");
    }
}
