use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GeocodeError {
    /// The service answered but matched nothing.
    #[error("Address Not Found Error: '{address}' {location}")]
    AddressNotFound {
        address: String,
        location: ErrorLocation,
    },

    #[error("Geocoding Service Error: HTTP {status} - {body} {location}")]
    Service {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Geocoding HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Geocoding JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Geocoding URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for GeocodeError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GeocodeError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        GeocodeError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for GeocodeError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        GeocodeError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
