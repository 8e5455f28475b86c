use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Only janis' own events are shown by default: `info` covers theme loading,
/// `-v` adds the per-style `debug` events. `RUST_LOG` overrides both.
/// Logs go to stderr so styled text on stdout can be piped untouched.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose { "janis=debug" } else { "janis=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
