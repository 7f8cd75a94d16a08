//! Reversibly encoded API key as stored in configuration.
//!
//! The encoding is plain base64. It only keeps the key from being read at a
//! glance in a config file; it is not a security boundary.

use crate::{ApiKeyError, ErrorLocation, RedactedApiKey};

use std::fmt;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObfuscatedApiKey {
    encoded: String,
}

impl ObfuscatedApiKey {
    /// Wrap an already-encoded value (as found in config files).
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Encode a plain-text key for storage.
    pub fn encode(plain: &str) -> Self {
        Self {
            encoded: STANDARD.encode(plain.as_bytes()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.trim().is_empty()
    }

    /// Decode the stored value into a usable key.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiKeyError::Decode`] if the value is not valid base64 or
    /// does not decode to UTF-8.
    #[track_caller]
    pub fn decode(&self) -> Result<RedactedApiKey, ApiKeyError> {
        let bytes = STANDARD
            .decode(self.encoded.trim())
            .map_err(|e| ApiKeyError::Decode {
                message: format!("API key is not valid base64: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let plain = String::from_utf8(bytes).map_err(|e| ApiKeyError::Decode {
            message: format!("API key does not decode to UTF-8: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(RedactedApiKey::new(plain))
    }
}

impl fmt::Debug for ObfuscatedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObfuscatedApiKey({} chars)", self.encoded.len())
    }
}
