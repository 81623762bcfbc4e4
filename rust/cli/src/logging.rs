//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Env var holding the filter directives, e.g. `duelpoker_engine=debug`.
pub const LOG_ENV: &str = "DUELPOKER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by [`LOG_ENV`]. Later calls are
/// no-ops so tests and embedders can call it freely.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::warn!("logging initialised");
    }
}
