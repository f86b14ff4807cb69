use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

/// Install a subscriber for the current test only.
///
/// Respects `RUST_LOG`; defaults to `debug` so fallback and singular-matrix
/// messages show up in `--nocapture` runs.
pub fn init_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let fmt_layer = fmt::layer().with_target(true).with_test_writer();

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .set_default()
}
