//! Tern command-line driver.
//!
//! The binary (`tern`) is a thin dispatcher over [`commands`]; everything it
//! does is reachable from here so tests can call it without a subprocess.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tern_lexer=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
