use crate::error::DeskError;
use crate::state::{AppState, StateCommand};

use common::ErrorLocation;
use models::QuoteRequest;
use quote_core::QuoteOutcome;
use quote_core::config::load_configuration;

use std::panic::Location;

use log::{debug, error, info};

/// Price a trip with the configuration as it stands right now.
///
/// Configuration is re-read on every call so Admin changes apply to the
/// next quote without a restart. A successful quote becomes the session's
/// last quote; a failed one leaves state untouched.
///
/// # Returns
///
/// * `Ok(QuoteOutcome)` - priced trip with display strings
/// * `Err(DeskError::Core)` - validation, geocoding or routing failed
pub async fn calculate_quote(
    state: &AppState,
    request: QuoteRequest,
) -> Result<QuoteOutcome, DeskError> {
    debug!("Quote requested");

    let config = load_configuration(state.config_dir()).map_err(|e| {
        error!("Failed to load configuration: {e}");
        DeskError::core(&e.into())
    })?;

    let outcome = state
        .engine()
        .calculate_quote(&request, &config)
        .await
        .map_err(|e| {
            error!("Quote failed: {e}");
            DeskError::core(&e)
        })?;

    info!("Quote {} for {}", outcome.summary.total, outcome.summary.distance);

    state
        .update(StateCommand::SetQuote(Box::new(outcome.clone())))
        .await
        .map_err(|e| {
            error!("Failed to store quote: {e}");
            DeskError::Desk {
                message: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    Ok(outcome)
}
