pub mod filter;
pub mod format;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use self::filter::ErrorWarnFilter;
use self::format::MiazyFormat;
use crate::config::LoggingConfig;

fn default_directive() -> &'static str {
    if cfg!(feature = "dev") { "miazy=info" } else { "miazy=warn" }
}

/// Installs the global subscriber: console output filtered by `RUST_LOG`, plus a
/// daily warn/error log file when `logging.directory` is set.
///
/// Keep the returned guard alive for as long as file logs should be flushed.
pub fn setup_tracing(
    app_name: &str,
    logging: &LoggingConfig,
) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()));

    let format = MiazyFormat {
        app_name: app_name.to_string(),
    };

    let console = tracing_subscriber::fmt::Layer::default()
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .event_format(format.clone())
        .with_filter(env_filter);

    let mut guard = None;
    let file_layer = logging.directory.as_deref().and_then(|dir| {
        let dir = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Failed to create logs directory {}: {}", dir.display(), e);
            return None;
        }
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, format!("{}.log", app_name));
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);
        Some(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_writer(non_blocking)
                .event_format(format.clone())
                .with_filter(ErrorWarnFilter),
        )
    });

    let subscriber = tracing_subscriber::registry().with(console).with(file_layer);

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            tracing::debug!("{}_logging_started", app_name);
            guard
        },
        Err(e) => {
            eprintln!("Error setting up logging: {}", e);
            None
        },
    }
}
