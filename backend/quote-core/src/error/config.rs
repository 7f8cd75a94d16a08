use std::panic::Location;
use std::path::PathBuf;

use common::{ApiKeyError, ErrorLocation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Serialization Error: {reason} {location}")]
    SerializeError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Credential Error: {reason} {location}")]
    Credential {
        location: ErrorLocation,
        reason: String,
    },
}

impl From<ApiKeyError> for ConfigError {
    #[track_caller]
    fn from(error: ApiKeyError) -> Self {
        ConfigError::Credential {
            location: ErrorLocation::from(Location::caller()),
            reason: error.to_string(),
        }
    }
}
