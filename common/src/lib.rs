//! Shared building blocks for the courier quote workspace.
//!
//! Everything here is domain-agnostic: error location tracking, credential
//! wrappers that keep keys out of logs, and HTTP status categorization.

pub mod error;
pub mod http_status;
pub mod obfuscated_key;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::api_key_error::ApiKeyError;
pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use obfuscated_key::ObfuscatedApiKey;
pub use redacted_key::RedactedApiKey;
