//! Subscriber pieces: the env filter and the console and file output layers.

use crate::error::{LoggerError, LoggerErrorExt};
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Rolled log files kept on disk, one per day.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

pub(crate) type FilteredRegistry = Layered<EnvFilter, Registry>;
pub(crate) type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

/// `directives` replace `RUST_LOG` when given; `level` is the default for unmatched targets.
pub(crate) fn env_filter(
    level: LevelFilter,
    directives: Option<&str>,
) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

pub(crate) fn console_layer(json: bool) -> BoxedLayer {
    let console = layer().with_ansi(!json);
    if json { console.json().boxed() } else { console.compact().boxed() }
}

/// Daily-rolling, non-blocking file output named `<name>.<date>.log` inside `directory`.
///
/// The returned guard flushes pending lines when dropped.
pub(crate) fn file_layer(
    name: &str,
    directory: &Path,
    json: bool,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory)
        .context(format!("Failed to create path: {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(directory)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = layer().with_writer(writer).with_ansi(false);

    let boxed = if json { file.json().boxed() } else { file.boxed() };
    Ok((boxed, guard))
}
