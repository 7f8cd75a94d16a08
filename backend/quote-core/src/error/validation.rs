use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ValidationError {
    #[error("Missing Field Error: '{field}' is required {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    /// `message` is already phrased for the end user.
    #[error("Invalid Field Error: '{field}': {message} {location}")]
    InvalidFormat {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}
