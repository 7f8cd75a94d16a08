//! Decoded API key with redacted Debug output.

use crate::{ApiKeyError, ErrorLocation};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// A plain-text API key that never exposes its value in logs or debug output.
///
/// Produced by [`crate::ObfuscatedApiKey::decode`] right before a request is
/// built and dropped (and zeroized) once the request is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// The actual key value, for placing into an outgoing request only.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Decoded keys must never end up in a payload or a saved config file.
impl serde::Serialize for RedactedApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(ApiKeyError::Serialization {
            message: String::from("RedactedApiKey cannot be serialized - use expose() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
