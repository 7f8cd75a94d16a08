//! The local override store: a single JSON file of partial settings.
//!
//! Field names follow the admin panel's camelCase shape. The legacy keys
//! `orsKey` (one key for both map services) and `gasWebAppUrl` are still
//! accepted.

use crate::error::config::ConfigError;

use common::{ErrorLocation, ObfuscatedApiKey};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const OVERRIDES_FILE_NAME: &str = "overrides.json";

// ============================================
// OVERRIDE STRUCTS
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressOverride {
    #[serde(rename = "address", default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_mile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_per_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_wait_mins: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocode_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directions_url: Option<String>,
}

/// Partial configuration; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<AddressOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RatesOverride>,
    /// Shared key for both map services; the specific keys win over it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ors_key: Option<ObfuscatedApiKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocode_api_key: Option<ObfuscatedApiKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_api_key: Option<ObfuscatedApiKey>,
    #[serde(
        alias = "gasWebAppUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub submission_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesOverride>,
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ConfigOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Load overrides from {config_dir}/overrides.json.
    ///
    /// Never fails: a missing file, unreadable file or malformed JSON all
    /// yield an empty override (defaults only).
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(OVERRIDES_FILE_NAME);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("Failed to read overrides at {}, ignoring: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<ConfigOverride>(&contents) {
            Ok(overrides) => {
                info!("Overrides loaded from {}", path.display());
                overrides
            }
            Err(e) => {
                warn!("Malformed overrides at {}, ignoring: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save overrides to {config_dir}/overrides.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a rate override is invalid, or if directory
    /// creation, serialization, write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let path = config_dir.join(OVERRIDES_FILE_NAME);
        let temp_path = config_dir.join(format!("{OVERRIDES_FILE_NAME}.tmp"));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.clone(),
            source: e,
        })?;

        info!("Overrides saved to {}", path.display());
        Ok(())
    }

    /// Remove the override store, returning to defaults. A missing file is not an error.
    pub fn clear(config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_dir.join(OVERRIDES_FILE_NAME);

        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!("Overrides cleared at {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path,
                source: e,
            }),
        }
    }

    /// Reject rate overrides that would break the non-negative tariff invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(rates) = &self.rates else {
            return Ok(());
        };

        for (name, value) in [
            ("base", rates.base),
            ("perMile", rates.per_mile),
            ("waitPerMin", rates.wait_per_min),
            ("freeWaitMins", rates.free_wait_mins),
        ] {
            if let Some(v) = value
                && (!v.is_finite() || v < 0.0)
            {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Rate '{name}' must be a non-negative number, got {v}"),
                });
            }
        }

        Ok(())
    }
}
