//! 日志初始化
//!
//! 控制台输出 (开发) 或按天滚动的日志文件 (`LOG_DIR`)。

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file prefix inside `LOG_DIR`; files are named `banquet-server.YYYY-MM-DD`
const LOG_FILE_PREFIX: &str = "banquet-server";

/// Console logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Console or daily-file logger.
///
/// `RUST_LOG` takes precedence over `log_level`. If `log_dir` cannot be
/// created the logger falls back to the console. Calling this twice is a
/// no-op.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let file_dir = log_dir
        .map(Path::new)
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());

    let installed = match file_dir {
        Some(dir) => builder
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        None => builder.try_init(),
    };

    if installed.is_ok()
        && let (Some(dir), None) = (log_dir, file_dir)
    {
        tracing::warn!(dir, "Log directory unavailable, logging to console");
    }
}
