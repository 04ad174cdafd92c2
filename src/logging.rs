use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the game on stdout. `RUST_LOG` overrides the configured filter and
/// `verbose` overrides both.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("memory_match=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
