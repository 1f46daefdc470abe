//! Logging utilities

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

fn default_directive() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// `RUST_LOG` first, then `SENSDECK_LOGLEVEL`, then `sensdeck=info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV.as_str()))
        .unwrap_or_else(|_| EnvFilter::new(default_directive()))
}

/// Routes `tracing` and `log` output to `<data dir>/sensdeck.log`.
///
/// The terminal is owned by the UI, so nothing is ever written to stdout.
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_directive_targets_this_crate() {
        assert_eq!(default_directive(), "sensdeck=info");
        assert_eq!(LOG_ENV.as_str(), "SENSDECK_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "sensdeck.log");
    }
}
