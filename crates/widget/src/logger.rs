use std::path::Path;

use eyre::WrapErr;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the non-blocking writers alive. Logging stops when this is dropped.
pub struct TracingGuards {
    _file: WorkerGuard,
    _stdout: WorkerGuard,
}

/// Logs to stdout and to `<log_dir>/<prefix>.YYYY-MM-DD.log`, rolled over at
/// midnight UTC.
pub fn init_tracing(log_dir: &Path, prefix: &str) -> eyre::Result<TracingGuards> {
    let (file_writer, file_guard) = daily_file_appender(log_dir, prefix)?;
    let (stdout_writer, stdout_guard) = non_blocking(std::io::stdout());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // the file only keeps INFO and above
    let file_filter = EnvFilter::new("info");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_filter(file_filter),
        )
        .with(fmt::layer().with_writer(stdout_writer).with_ansi(true))
        .try_init()
        .wrap_err("tracing subscriber already installed")?;

    Ok(TracingGuards {
        _file: file_guard,
        _stdout: stdout_guard,
    })
}

fn daily_file_appender(log_dir: &Path, prefix: &str) -> eyre::Result<(NonBlocking, WorkerGuard)> {
    Ok(non_blocking(daily_roller(log_dir, prefix)?))
}

fn daily_roller(log_dir: &Path, prefix: &str) -> eyre::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(log_dir)
        .wrap_err_with(|| format!("opening log files in {}", log_dir.display()))
}
