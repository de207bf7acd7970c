//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Maps `-v` counts to a default filter directive
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    // A subscriber may already be installed (tests); keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
