use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 滚动日志文件名前缀，实际文件带日期后缀
pub const LOG_FILE_NAME: &str = "vocaboost.log";

/// 文件日志后台写线程的守卫
///
/// 必须在 main 中持有到退出，drop 时才会把缓冲的日志刷到文件。
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// 终端界面占用 stdout，日志写到 stderr
///
/// `file_log_dir` 为 Some 时额外按天滚动写文件；目录创建失败只写 stderr。
pub fn init_tracing(log_level: &str, file_log_dir: Option<&Path>) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let file_writer = file_log_dir.and_then(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => Some(tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::DAILY,
            dir,
            LOG_FILE_NAME,
        ))),
        Err(err) => {
            eprintln!("failed to create log directory {}: {err}", dir.display());
            None
        }
    });

    let Some((file_writer, guard)) = file_writer else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return None;
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Some(FileLogGuard { _guard: guard })
}
