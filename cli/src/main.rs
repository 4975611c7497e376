//! portprobe CLI - Probe ports through an external scanner
//!
//! A command-line front end that runs `portScanner` for an address and port
//! and prints the scanner's report for that port.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portprobe_core::{ScanInvoker, ScannerConfig, DEFAULT_TIMEOUT_SECS};

use logging::LogFormat;

#[derive(Parser)]
#[command(name = "portprobe")]
#[command(author, version, about = "Probe ports through an external scanner")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scanner executable to run
    #[arg(long, global = true, default_value = portprobe_core::config::DEFAULT_PROGRAM)]
    scanner: PathBuf,

    /// Argument placed before the scanner flags (repeatable), e.g.
    /// `--scanner timeout --scanner-arg 10 --scanner-arg portScanner`
    #[arg(long = "scanner-arg", global = true, allow_hyphen_values = true)]
    scanner_args: Vec<String>,

    /// Per-connection timeout forwarded to the scanner, in seconds
    #[arg(short, long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan one port and print its report entry
    Scan {
        /// Hostname or IP address
        address: String,
        /// Port number
        port: u16,
    },

    /// Scan several ports one after another
    Batch {
        /// Hostname or IP address
        address: String,
        /// Port numbers
        #[arg(required = true, num_args = 1..)]
        ports: Vec<u16>,
    },

    /// Print the scanner command line without running it
    #[command(alias = "dry-run")]
    Args {
        /// Hostname or IP address
        address: String,
        /// Port number
        port: u16,
    },
}

impl Cli {
    /// Scanner launch settings from the global flags.
    fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig::new()
            .program(self.scanner.clone())
            .leading_args(self.scanner_args.iter().cloned())
            .timeout_seconds(self.timeout)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    let invoker = ScanInvoker::from_config(&cli.scanner_config())?;
    tracing::debug!(
        scanner = %invoker.program().display(),
        timeout = invoker.default_timeout(),
        "Scanner configured"
    );

    match cli.command {
        Commands::Scan { address, port } => {
            commands::scan::run(&invoker, &address, port, cli.json).await?;
        }
        Commands::Batch { address, ports } => {
            commands::batch::run(invoker, address, ports, cli.json).await?;
        }
        Commands::Args { address, port } => {
            commands::args::run(&invoker, &address, port, cli.json)?;
        }
    }

    Ok(())
}
