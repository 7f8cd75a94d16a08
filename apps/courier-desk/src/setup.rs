//! Desk startup: the one place a host (window shell, CLI, test harness)
//! calls before issuing commands.

use crate::error::DeskError;
use crate::logger;
use crate::state::AppState;

use common::ErrorLocation;
use quote_core::QuoteEngine;
use quote_core::config::default_config_dir;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::Path;

use log::info;

const LOG_DIR_NAME: &str = "logs";

/// Prepare `data_dir`, start logging into `{data_dir}/logs` and build the
/// session state. Overrides are read from and saved to `data_dir`.
///
/// # Errors
///
/// Returns [`DeskError::Desk`] if the directories or log file cannot be
/// created, or [`DeskError::Core`] if the HTTP client cannot be built.
pub fn start(data_dir: &Path) -> Result<AppState, DeskError> {
    let log_dir = data_dir.join(LOG_DIR_NAME);

    create_dir_all(&log_dir).map_err(|e| DeskError::Desk {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    logger::initialize(&log_dir)?;

    info!("Courier desk starting");
    info!("Data directory: {}", data_dir.display());

    let engine = QuoteEngine::new().map_err(|e| DeskError::core(&e))?;

    Ok(AppState::new(data_dir, engine))
}

/// [`start`] in the platform config directory.
pub fn start_in_default_dir() -> Result<AppState, DeskError> {
    let data_dir = default_config_dir().ok_or_else(|| DeskError::Desk {
        message: String::from("No platform config directory available"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    start(&data_dir)
}
