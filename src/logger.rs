use env_logger::{Builder, Env};

/// Installs the global logger. The level comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logger(is_test: bool) {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(is_test)
        .format_timestamp_secs()
        .try_init();
}
