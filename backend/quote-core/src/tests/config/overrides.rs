// Unit tests for the override store on disk

use crate::config::overrides::RatesOverride;
use crate::config::{ConfigOverride, load_configuration};
use crate::error::config::ConfigError;

use common::ObfuscatedApiKey;

use tempfile::TempDir;

const OVERRIDES_FILE_NAME: &str = "overrides.json";

/// **VALUE**: Verifies a missing override store means defaults only.
#[test]
fn given_no_override_file_when_loaded_then_empty_override() {
    // GIVEN: An empty directory
    let dir = TempDir::new().expect("temp dir");

    // WHEN
    let overrides = ConfigOverride::load(dir.path());

    // THEN
    assert!(overrides.is_empty());
}

/// **VALUE**: Verifies malformed JSON is treated as no overrides rather than an error.
///
/// **WHY THIS MATTERS**: A half-written file must not lock the desk out of quoting.
#[test]
fn given_malformed_override_file_when_loaded_then_empty_override() {
    // GIVEN
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join(OVERRIDES_FILE_NAME), "{ not json").expect("write");

    // WHEN
    let overrides = ConfigOverride::load(dir.path());

    // THEN
    assert!(overrides.is_empty());
}

/// **VALUE**: Verifies blobs saved by the admin panel (legacy key names) are understood.
#[test]
fn given_admin_panel_blob_when_loaded_then_legacy_keys_mapped() {
    // GIVEN: The admin panel's shape
    let dir = TempDir::new().expect("temp dir");
    let blob = r#"{
        "office": {"address": "1 Main", "city": "Burlington", "state": "IA", "zip": "52601"},
        "rates": {"base": 25, "perMile": 3, "waitPerMin": 0.75, "freeWaitMins": 5},
        "orsKey": "a2V5",
        "gasWebAppUrl": "https://script.example/exec"
    }"#;
    std::fs::write(dir.path().join(OVERRIDES_FILE_NAME), blob).expect("write");

    // WHEN
    let config = load_configuration(dir.path()).expect("resolves");

    // THEN
    assert_eq!(config.office.street, "1 Main");
    assert_eq!(config.rates.per_mile, 3.0);
    assert_eq!(config.rates.free_wait_mins, 5.0);
    assert_eq!(config.submission_endpoint, "https://script.example/exec");
    assert_eq!(config.geocode_api_key.decode().expect("decodes").expose(), "key");
    assert_eq!(config.routing_api_key.decode().expect("decodes").expose(), "key");
}

/// **VALUE**: Verifies saved overrides are read back and no temp file is left behind.
#[test]
fn given_saved_override_when_loaded_then_round_trips() {
    // GIVEN
    let dir = TempDir::new().expect("temp dir");
    let overrides = ConfigOverride {
        rates: Some(RatesOverride {
            per_mile: Some(3.0),
            ..Default::default()
        }),
        geocode_api_key: Some(ObfuscatedApiKey::encode("geo")),
        ..Default::default()
    };

    // WHEN
    overrides.save(dir.path()).expect("saves");
    let loaded = ConfigOverride::load(dir.path());

    // THEN
    assert_eq!(loaded, overrides);
    assert!(!dir.path().join(format!("{OVERRIDES_FILE_NAME}.tmp")).exists());
}

/// **VALUE**: Verifies an invalid rate is refused at save time.
#[test]
fn given_negative_rate_when_saved_then_returns_validation_error_and_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let overrides = ConfigOverride {
        rates: Some(RatesOverride {
            base: Some(-1.0),
            ..Default::default()
        }),
        ..Default::default()
    };

    let result = overrides.save(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    assert!(!dir.path().join(OVERRIDES_FILE_NAME).exists());
}

/// **VALUE**: Verifies reset removes the store and tolerates an already-missing file.
#[test]
fn given_saved_override_when_cleared_twice_then_defaults_restored() {
    // GIVEN
    let dir = TempDir::new().expect("temp dir");
    ConfigOverride {
        submission_endpoint: Some(String::from("https://receiver.example")),
        ..Default::default()
    }
    .save(dir.path())
    .expect("saves");

    // WHEN
    ConfigOverride::clear(dir.path()).expect("first clear");
    ConfigOverride::clear(dir.path()).expect("second clear is a no-op");

    // THEN
    let config = load_configuration(dir.path()).expect("defaults");
    assert!(config.submission_endpoint.is_empty());
}
