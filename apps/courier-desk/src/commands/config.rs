use crate::error::DeskError;
use crate::state::AppState;

use quote_core::Configuration;
use quote_core::config::{ConfigOverride, load_configuration};

use log::{error, info};

/// The configuration the next quote would use.
pub fn current_configuration(state: &AppState) -> Result<Configuration, DeskError> {
    load_configuration(state.config_dir()).map_err(|e| {
        error!("Failed to load configuration: {e}");
        DeskError::core(&e.into())
    })
}

/// Replace the Admin overrides and return the resulting configuration.
///
/// Invalid rates are refused and the stored overrides are left as they were.
pub fn save_overrides(
    state: &AppState,
    overrides: ConfigOverride,
) -> Result<Configuration, DeskError> {
    overrides.save(state.config_dir()).map_err(|e| {
        error!("Failed to save overrides: {e}");
        DeskError::core(&e.into())
    })?;

    info!("Admin overrides saved");

    current_configuration(state)
}

/// Drop all Admin overrides, returning to the compiled-in defaults.
pub fn reset_overrides(state: &AppState) -> Result<Configuration, DeskError> {
    ConfigOverride::clear(state.config_dir()).map_err(|e| {
        error!("Failed to clear overrides: {e}");
        DeskError::core(&e.into())
    })?;

    info!("Admin overrides reset to defaults");

    current_configuration(state)
}
