use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "bookshelf.log";

/// Install the global subscriber: compact lines on stderr, plus a daily
/// rolling JSON file when `log_file` is given. `RUST_LOG` overrides the
/// default filter.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.as_deref().map(|path| {
        fmt::layer()
            .with_writer(rolling_appender(path))
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

/// Filter used when `RUST_LOG` is not set. The HTTP trace layer logs under
/// `tower_http`, so it is enabled alongside the crate itself.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookshelf={level},tower_http={level}")
}

/// Directory and file-name prefix for the rolling appender. A bare file name
/// logs into the working directory.
fn split_log_path(path: &Path) -> (&Path, &OsStr) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));
    (dir, prefix)
}

fn rolling_appender(path: &Path) -> RollingFileAppender {
    let (dir, prefix) = split_log_path(path);
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create log directory {}: {}", dir.display(), e);
    }
    tracing_appender::rolling::daily(dir, prefix)
}
