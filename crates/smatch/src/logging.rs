//! Opt-in diagnostic output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that prints to stderr, filtered by
/// `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call repeatedly; only the
/// first call has any effect. Applications that install their own subscriber
/// should not call this.
///
/// ```text
/// RUST_LOG=smatch=trace cargo test -p smatch
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .try_init();
        }
    });
}
