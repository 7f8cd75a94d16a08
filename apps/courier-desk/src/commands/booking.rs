use crate::error::DeskError;
use crate::state::{AppState, StateCommand};

use common::ErrorLocation;
use models::BookingRequest;
use quote_core::booking::BookingConfirmation;
use quote_core::config::load_configuration;

use std::panic::Location;

use log::{debug, error, info, warn};

/// Submit a booking for the trip quoted earlier in this session.
///
/// The trip is re-priced from the booking form before submission, so the
/// payload always carries a quote computed with the current settings.
/// On success the session quote is cleared, ready for the next customer.
///
/// # Returns
///
/// * `Ok(BookingConfirmation)` - the receiver accepted the booking
/// * `Err(DeskError::NoQuote)` - no successful quote yet
/// * `Err(DeskError::Core)` - validation, endpoint or submission failed
pub async fn submit_booking(
    state: &AppState,
    request: BookingRequest,
) -> Result<BookingConfirmation, DeskError> {
    debug!("Booking requested");

    if state.get_quote().await.is_none() {
        warn!("Booking requested before a quote was calculated");
        return Err(DeskError::NoQuote {
            message: String::from("Please calculate a quote first."),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let config = load_configuration(state.config_dir()).map_err(|e| {
        error!("Failed to load configuration: {e}");
        DeskError::core(&e.into())
    })?;

    let confirmation = state.engine().book(&request, &config).await.map_err(|e| {
        error!("Booking failed: {e}");
        DeskError::core(&e)
    })?;

    info!(
        "Booking submitted at {} for ${:.2}",
        confirmation.submitted_at, confirmation.total_amount
    );

    state.update(StateCommand::ClearQuote).await.map_err(|e| {
        error!("Failed to clear quote after booking: {e}");
        DeskError::Desk {
            message: e,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(confirmation)
}
