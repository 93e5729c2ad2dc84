//! Repotrend binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod events;
mod logic;
mod sources;
mod state;
mod theme;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

/// Timestamp formatter for log lines, `YYYY-MM-DDTHH:MM:SS` in UTC.
struct RepotrendTimer;

impl tracing_subscriber::fmt::time::FormatTime for RepotrendTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing to a log file under the config directory, falling
/// back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("repotrend.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RepotrendTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_timer(RepotrendTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    let settings = theme::settings();

    init_logging(&args::determine_log_level(&cli, &settings));

    let days = args::determine_days(&cli, &settings);
    tracing::info!(days, "Repotrend starting");
    if let Err(err) = app::run(days).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Repotrend exited");
}
