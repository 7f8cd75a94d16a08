//! Error taxonomy for the quote pipeline.
//!
//! Each stage has its own enum; [`CoreError`] wraps them without rewording
//! so a failure reaches the caller exactly as the failing stage raised it.

pub mod booking;
pub mod config;
pub mod geocode;
pub mod route;
pub mod validation;

pub use booking::BookingError;
pub use config::ConfigError;
pub use geocode::GeocodeError;
pub use route::RouteError;
pub use validation::ValidationError;

use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("HTTP Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// One-line message suitable for showing to the person at the form.
    ///
    /// Unlike `Display`, this omits source locations.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Config(ConfigError::Credential { .. }) => {
                String::from("The map service key in Admin settings could not be read.")
            }
            CoreError::Config(ConfigError::ValidationError { reason, .. }) => reason.clone(),
            CoreError::Config(_) => String::from("Settings could not be loaded."),
            CoreError::Validation(ValidationError::MissingField { .. }) => {
                String::from("Please complete all required fields.")
            }
            CoreError::Validation(ValidationError::InvalidFormat { message, .. }) => message.clone(),
            CoreError::Geocode(GeocodeError::AddressNotFound { address, .. }) => {
                format!("Address not found: {address}")
            }
            CoreError::Geocode(_) => String::from("Geocoding failed"),
            CoreError::Route(RouteError::Service { body, .. }) => format!("Routing failed: {body}"),
            CoreError::Route(_) => String::from("Routing failed"),
            CoreError::Booking(BookingError::Endpoint { .. }) => {
                String::from("Admin: Please set the booking endpoint URL in Admin.")
            }
            CoreError::Booking(BookingError::Rejected { status, body, .. }) => {
                format!("Error sending booking: {status} {body}")
            }
            CoreError::Booking(_) => String::from("Error sending booking"),
            CoreError::Client { .. } => String::from("Could not start the network client."),
        }
    }
}
