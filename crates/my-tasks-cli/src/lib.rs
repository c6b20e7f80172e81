pub mod cli;
pub mod exit_codes;

/// Routes `tracing`/`log` output to stderr; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
