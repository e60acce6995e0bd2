//! Tracing subscriber setup for binaries embedding the runtime.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logs to stderr and to `<log_dir>/<file_name>`.
///
/// The filter comes from `RUST_LOG` with `info` added as a directive. Keep the
/// returned guard alive for as long as file output is wanted.
pub fn setup_logging(log_dir: &Path, file_name: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!("Log file: {}", log_dir.join(file_name).display());

    Ok(guard)
}
