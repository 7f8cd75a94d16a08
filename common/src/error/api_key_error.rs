use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiKeyError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Key Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}
