//! Tracing setup
//!
//! Logs go to stderr so they never mix with the generated document on
//! stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "eslintrc_gen=warn",
        1 => "eslintrc_gen=info",
        2 => "eslintrc_gen=debug",
        _ => "eslintrc_gen=trace",
    }
}

/// Initialize the tracing subscriber for logging
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this more than
/// once keeps the first subscriber.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
