//! Logging initialisation for the binaries.
//!
//! Installs a global `tracing` subscriber writing human-readable events to
//! `stderr`. The level defaults to `info` and can be changed with `RUST_LOG`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. Calling it again is a no-op, and an already
/// installed subscriber from elsewhere is left in place.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
        if let Err(err) = installed {
            eprintln!("structured logging already configured elsewhere: {}", err);
        }
    });
}
