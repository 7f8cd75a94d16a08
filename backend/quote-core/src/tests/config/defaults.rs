// Unit tests for the compiled-in default configuration

use crate::OPENROUTESERVICE_BASE_URL;
use crate::config::Configuration;
use crate::error::config::ConfigError;

use models::Tariff;

/// **VALUE**: Verifies the embedded defaults parse and satisfy the rate invariant.
///
/// **WHY THIS MATTERS**: Every configuration starts from these values. A typo in
/// `defaults.toml` would make every quote fail before the first network call.
#[test]
fn given_embedded_defaults_when_parsed_then_valid_configuration() {
    // WHEN
    let config = Configuration::defaults().expect("defaults parse");

    // THEN
    assert_eq!(config.rates, Tariff::new(20.0, 2.0, 0.5, 10.0));
    assert_eq!(config.office.city, "Burlington");
    assert_eq!(config.services.geocode_url, OPENROUTESERVICE_BASE_URL);
    assert!(config.submission_endpoint.is_empty());
}

/// **VALUE**: Verifies validation rejects a negative rate.
#[test]
fn given_negative_rate_when_validated_then_returns_validation_error() {
    // GIVEN
    let mut config = Configuration::defaults().expect("defaults parse");
    config.rates.wait_per_min = -0.5;

    // WHEN
    let result = config.validate();

    // THEN
    match result {
        Err(ConfigError::ValidationError { reason, .. }) => assert!(reason.contains("waitPerMin")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies validation rejects a non-http service URL.
#[test]
fn given_non_http_service_url_when_validated_then_returns_validation_error() {
    let mut config = Configuration::defaults().expect("defaults parse");
    config.services.directions_url = String::from("ftp://maps.example");

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
