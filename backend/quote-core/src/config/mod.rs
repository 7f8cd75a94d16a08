pub mod overrides;
pub mod resolve;

pub use overrides::ConfigOverride;
pub use resolve::resolve;

use crate::OPENROUTESERVICE_BASE_URL;
use crate::error::config::ConfigError;

use common::{ErrorLocation, ObfuscatedApiKey};
use models::{Address, BusinessProfile, Tariff};

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

const DEFAULTS_TOML: &str = include_str!("../../config/defaults.toml");
const DEFAULTS_SOURCE_NAME: &str = "config/defaults.toml";
const CONFIG_DIR_NAME: &str = "courier-quote";

// ============================================
// CONFIG STRUCTS
// ============================================

/// Base URLs of the third-party map services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoints {
    #[serde(default = "default_service_url")]
    pub geocode_url: String,
    #[serde(default = "default_service_url")]
    pub directions_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            geocode_url: default_service_url(),
            directions_url: default_service_url(),
        }
    }
}

/// One immutable snapshot of everything a quote or booking needs.
///
/// Produced by [`load_configuration`] (or [`resolve`] directly) and passed by
/// reference down the pipeline; nothing below reads settings on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub office: Address,
    pub rates: Tariff,
    #[serde(default)]
    pub geocode_api_key: ObfuscatedApiKey,
    #[serde(default)]
    pub routing_api_key: ObfuscatedApiKey,
    #[serde(default)]
    pub submission_endpoint: String,
    #[serde(default)]
    pub business: BusinessProfile,
    #[serde(default)]
    pub services: ServiceEndpoints,
}

fn default_service_url() -> String {
    OPENROUTESERVICE_BASE_URL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl Configuration {
    /// Parse and validate the compiled-in defaults.
    pub fn defaults() -> Result<Self, ConfigError> {
        let config: Configuration =
            toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: PathBuf::from(DEFAULTS_SOURCE_NAME),
                reason: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if a rate is negative or not
    /// finite, or a service URL is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(field) = self.rates.first_invalid_field() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Rate '{field}' must be a non-negative number"),
            });
        }

        for (name, url) in [
            ("geocodeUrl", &self.services.geocode_url),
            ("directionsUrl", &self.services.directions_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Invalid {name} format: {url}"),
                });
            }
        }

        Ok(())
    }
}

/// Default directory for the override store, under the platform config dir.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Build the configuration snapshot for one computation.
///
/// Compiled-in defaults, overlaid with whatever the override store in
/// `config_dir` holds. A missing or unreadable override store means
/// defaults only.
///
/// # Errors
///
/// Returns [`ConfigError`] only if the compiled-in defaults are invalid.
pub fn load_configuration(config_dir: &Path) -> Result<Configuration, ConfigError> {
    let base = Configuration::defaults()?;
    let overrides = ConfigOverride::load(config_dir);

    if overrides.is_empty() {
        debug!("No overrides found in {}, using defaults", config_dir.display());
        return Ok(base);
    }

    let config = resolve(&base, &overrides);
    info!("Configuration resolved with overrides from {}", config_dir.display());

    Ok(config)
}
