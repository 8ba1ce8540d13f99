//! Process-wide `log` backend.
//!
//! Lines read `<rfc3339> <LEVEL> <target>: <message>`. Dependencies that log
//! per statement or per request are capped at `warn`.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::panic::Location;
use std::path::PathBuf;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

const QUIET_TARGETS: &[&str] = &["sqlx", "hyper", "hyper_util", "reqwest", "tower_http"];

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stdout { colored: bool },
    /// Appends to the file, creating it and its directory if needed
    File(PathBuf),
}

#[track_caller]
pub fn initialize(log_level: tandem_config::LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    build_dispatch(level_filter, &sink)?
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    match &sink {
        LogSink::File(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        LogSink::Stdout { colored } => info!(
            "Logger initialized: level={:?}, stdout, colored={}",
            level_filter, colored
        ),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

#[track_caller]
pub(crate) fn build_dispatch(level: LevelFilter, sink: &LogSink) -> ServerErrorResult<Dispatch> {
    let mut dispatch = Dispatch::new().level(level);
    for target in QUIET_TARGETS {
        dispatch = dispatch.level_for(*target, level.min(LevelFilter::Warn));
    }

    let output = match sink {
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
                    message: format!("Failed to create log directory {}: {}", parent.display(), e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            }
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} {}: {}",
                        humantime::format_rfc3339_millis(SystemTime::now()),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file)
        }
        LogSink::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{} {} {}: {}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        colors.color(record.level()),
                        record.target(),
                        message
                    ))
                })
                .chain(std::io::stdout())
        }
        LogSink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} {}: {}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stdout()),
    };

    Ok(dispatch.chain(output))
}
