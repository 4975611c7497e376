//! Args command - show the scanner command line without running it.

use anyhow::Result;
use portprobe_core::ScanInvoker;

pub fn run(invoker: &ScanInvoker, address: &str, port: u16, json: bool) -> Result<()> {
    let line = invoker.command_line(&invoker.request(address, port));
    println!("{}", render(&line, json)?);
    Ok(())
}

/// Format a command line as a shell-style string or a JSON array.
pub fn render(line: &[String], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(line)?)
    } else {
        Ok(line.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let invoker = ScanInvoker::new();
        let line = invoker.command_line(&invoker.request("google.com", 443));
        assert_eq!(
            render(&line, false).unwrap(),
            "portScanner --addr google.com --ports 443 --json --timeout 2"
        );
    }

    #[test]
    fn test_render_json() {
        let line = vec!["portScanner".to_string(), "--json".to_string()];
        let back: Vec<String> = serde_json::from_str(&render(&line, true).unwrap()).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_run_does_not_spawn() {
        // A program that cannot be launched still prints its command line.
        let invoker = ScanInvoker::with_program("/nonexistent/bin/portScanner");
        assert!(run(&invoker, "x", 443, false).is_ok());
    }
}
