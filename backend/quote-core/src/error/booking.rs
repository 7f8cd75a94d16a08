use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BookingError {
    /// Endpoint is missing, malformed, or could not be reached.
    #[error("Submission Endpoint Error: {message} {location}")]
    Endpoint {
        message: String,
        location: ErrorLocation,
    },

    #[error("Submission Rejected Error: HTTP {status} - {body} {location}")]
    Rejected {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Submission JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Booking Payload Error: {message} {location}")]
    Payload {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for BookingError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        BookingError::Endpoint {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for BookingError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        BookingError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for BookingError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        BookingError::Payload {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
