//! Logging setup for the `jsdoc` binary.
//!
//! Diagnostics go to stderr so rendered output on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Level precedence: `--verbose` (debug), `--quiet` (errors only),
/// `RUST_LOG`, then warnings by default.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("jsdoc=debug")
    } else if quiet {
        EnvFilter::new("jsdoc=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsdoc=warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
