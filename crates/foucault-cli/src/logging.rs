//! Tracing subscriber setup.
//!
//! Logs go to stderr so rendered and exported output on stdout stays clean.
//! `RUST_LOG` takes precedence over the `-v` count.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// Does nothing if a subscriber is already installed, so tests can call it
/// repeatedly.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
