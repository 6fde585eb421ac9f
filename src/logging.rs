use env_logger::Env;

use crate::config::LogConfig;

/// Initialize the global logger. `RUST_LOG` still wins over the configured
/// level. Calling this more than once is harmless.
pub fn init(config: &LogConfig) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .try_init();
}
