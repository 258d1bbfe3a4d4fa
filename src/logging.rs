//! Log setup for the binary.
//!
//! Library code logs through `tracing`; this installs a stderr subscriber.
//! `IMAGESET_LOG` takes an `EnvFilter` directive and wins over `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "IMAGESET_LOG";

/// Build the filter: `IMAGESET_LOG` if set and valid, else `debug` when
/// verbose and `warn` otherwise.
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    })
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
