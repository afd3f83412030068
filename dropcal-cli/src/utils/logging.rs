use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log filter env var, e.g. `DROPCAL_LOG=dropcal_core=debug`.
const LOG_ENV: &str = "DROPCAL_LOG";

/// Send tracing output to stderr so rendered output on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
