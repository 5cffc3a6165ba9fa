use env_logger::{Builder, Env};
use std::env;

const DEFAULT_FILTER: &str = "info";

/// Installs the global logger. `RUST_LOG` takes precedence over the default `info` filter.
pub fn init_logging() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
