//! Logger initialisation.
//!
//! Library code logs through the `log` facade only. Binaries pick the
//! backend: `env_logger` by default, or a `tracing_subscriber` registry
//! when built with the `tracing` feature.
//!
//! An example environment is shown:
//! ```bash
//! RUST_LOG=clearway=debug
//! ```

/// Initialises `env_logger`, filtered by `RUST_LOG` (default `info`).
/// Calling it more than once is harmless.
pub fn initialize_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

/// Initialises the tracer, using tracing subscription.
/// `log` records are forwarded into the registry, so the library's
/// announcements show up alongside any spans.
#[cfg(feature = "tracing")]
pub fn initialize_tracer() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init();
}
