//! Tracing setup
//!
//! Diagnostics go to stderr so they never mix with report output on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used (falling
/// back to `warn` if it does not parse). Calling this more than once is a
/// no-op.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing("debug");
        super::init_tracing("not a [valid filter");
    }
}
