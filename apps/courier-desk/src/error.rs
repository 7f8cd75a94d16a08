use common::ErrorLocation;

use quote_core::CoreError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors returned by desk commands.
///
/// Serializable so the form can show `message` as-is; the location stays
/// available for logs.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DeskError {
    /// Error from this app (logger, state actor)
    #[error("Desk Error: {message} {location}")]
    Desk {
        message: String,
        location: ErrorLocation,
    },

    /// Error from the quote pipeline, already phrased for the user
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Booking attempted without a successful quote in this session
    #[error("No Quote Error: {message} {location}")]
    NoQuote {
        message: String,
        location: ErrorLocation,
    },
}

impl DeskError {
    /// Wrap a pipeline error with its user-facing message.
    #[track_caller]
    pub fn core(error: &CoreError) -> Self {
        DeskError::Core {
            message: error.user_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DeskError::Desk { message, .. }
            | DeskError::Core { message, .. }
            | DeskError::NoQuote { message, .. } => message,
        }
    }
}
