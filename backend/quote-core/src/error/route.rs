use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RouteError {
    /// Non-success status; `body` is the service's own diagnostic text.
    #[error("Routing Service Error: HTTP {status} - {body} {location}")]
    Service {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("No Route Error: {message} {location}")]
    NoRoute {
        message: String,
        location: ErrorLocation,
    },

    #[error("Routing HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Routing JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Routing URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for RouteError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RouteError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RouteError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RouteError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RouteError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RouteError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
