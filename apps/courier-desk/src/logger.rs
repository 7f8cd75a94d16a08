//! Logging for the courier desk.
//!
//! Colored stdout plus a plain log file, initialized once per process.

use crate::error::DeskError;

use common::ErrorLocation;

use std::fmt::{Arguments, Display};
use std::io::stdout;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::{Dispatch, FormatCallback};
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339_seconds;
use log::{LevelFilter, Record, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "courier-desk.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stdout + `courier-desk.log` in `log_dir`).
///
/// Safe to call more than once: later calls log a warning and return `Ok`.
///
/// # Errors
///
/// Returns [`DeskError::Desk`] if the log file cannot be created or the
/// global logger is already set by someone else.
pub fn initialize(log_dir: &Path) -> Result<(), DeskError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(log_dir: &Path) -> Result<(), DeskError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let log_file = fern::log_file(&log_file_path).map_err(|e| DeskError::Desk {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            finish_line(out, colors.color(record.level()), message, record)
        })
        .chain(stdout());

    // Plain text, no color codes
    let file_dispatch = Dispatch::new()
        .format(|out, message, record| finish_line(out, record.level(), message, record))
        .chain(log_file);

    Dispatch::new()
        .level(LOG_LEVEL)
        // HTTP internals are chatty at debug
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Info)
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| DeskError::Desk {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}

/// `[timestamp - LEVEL] target: message`, shared by both outputs.
fn finish_line(out: FormatCallback<'_>, level: impl Display, message: &Arguments<'_>, record: &Record<'_>) {
    out.finish(format_args!(
        "[{date} - {level}] {target}: {message}",
        date = format_rfc3339_seconds(SystemTime::now()),
        target = record.target(),
    ))
}
