//! Subcommand implementations.

pub mod args;
pub mod batch;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;

    use portprobe_core::ScanInvoker;
    use tempfile::TempDir;

    /// Invoker running a shell script stub through /bin/sh.
    pub fn stub_invoker(dir: &TempDir, body: &str) -> ScanInvoker {
        let path = dir.path().join("scanner.sh");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        ScanInvoker::with_program("/bin/sh")
            .with_leading_args([path.to_string_lossy().into_owned()])
    }
}
