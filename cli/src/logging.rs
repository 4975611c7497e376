//! Logging setup using tracing.
//!
//! Logs go to stderr so stdout stays usable for JSON output.

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
    /// JSON format (for log aggregation)
    Json,
}

/// Level used when `RUST_LOG` is not set.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbosity: u8, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match format {
        LogFormat::Pretty => registry.with(layer.pretty()).init(),
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
