use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging
/// Logs are written to ~/.config/notes/logs/notes-YYYY-MM-DD-HH-MM-SS.log
///
/// The terminal belongs to the UI, so nothing is logged to stdout/stderr.
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init_logging() -> Result<(PathBuf, WorkerGuard)> {
    let logs_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("notes")
        .join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    let log_filename = log_file_name(&Local::now().format("%Y-%m-%d-%H-%M-%S").to_string());
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Default to INFO, can be overridden with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok((log_path, guard))
}

fn log_file_name(timestamp: &str) -> String {
    format!("notes-{}.log", timestamp)
}
