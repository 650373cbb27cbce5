use std::io;

use tracing::Subscriber;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::settings::LogFormat;

const DEFAULT_FILTER: &str = "info,actix_web=info,actix_server=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Compact stdout subscriber for the events emitted before the settings
/// (and with them the log format) are known. Meant for `with_default`.
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync + 'static {
    fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(io::stdout)
        .compact()
        .finish()
}

/// Installs the global subscriber. `RUST_LOG` wins over the default filter.
/// Also routes `log` records (actix's request logger) through tracing.
pub fn init_logging(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn bootstrap_subscriber_keeps_settings_warnings() {
        let enabled = tracing::subscriber::with_default(bootstrap_subscriber(), || {
            tracing::enabled!(Level::WARN)
        });
        assert!(enabled);
    }
}
