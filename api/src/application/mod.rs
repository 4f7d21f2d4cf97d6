use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

pub mod http;

/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
