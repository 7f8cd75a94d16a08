// Unit tests for merging overrides onto the base configuration

use crate::config::overrides::{AddressOverride, RatesOverride, ServicesOverride};
use crate::config::{ConfigOverride, Configuration, resolve};

use common::ObfuscatedApiKey;

fn base() -> Configuration {
    Configuration::defaults().expect("defaults parse")
}

/// **VALUE**: Scenario D: an overridden per-mile rate wins over the base rate.
///
/// **WHY THIS MATTERS**: Admins change rates through overrides. If the base value won,
/// quotes would silently keep the old price.
#[test]
fn given_per_mile_override_when_resolved_then_override_wins() {
    // GIVEN: Base perMile 2.00, override 3.00
    let overrides = ConfigOverride {
        rates: Some(RatesOverride {
            per_mile: Some(3.0),
            ..Default::default()
        }),
        ..Default::default()
    };

    // WHEN
    let resolved = resolve(&base(), &overrides);

    // THEN: Override wins, untouched rates keep base values
    assert_eq!(resolved.rates.per_mile, 3.0);
    assert_eq!(resolved.rates.base, 20.0);
    assert_eq!(resolved.rates.free_wait_mins, 10.0);
}

/// **VALUE**: Verifies an empty override changes nothing.
#[test]
fn given_empty_override_when_resolved_then_equals_base() {
    let base = base();

    let resolved = resolve(&base, &ConfigOverride::default());

    assert_eq!(resolved, base);
}

/// **VALUE**: Verifies blank override strings fall back to the base value, field by field.
///
/// **BUG THIS CATCHES**: Would catch a blank office city from the admin form wiping the
/// base city, which sends the office geocode to the wrong place.
#[test]
fn given_blank_office_fields_when_resolved_then_base_fields_kept() {
    // GIVEN: A street override and a blank city
    let overrides = ConfigOverride {
        office: Some(AddressOverride {
            street: Some(String::from("12 River Rd")),
            city: Some(String::from("   ")),
            state: None,
            zip: Some(String::new()),
        }),
        submission_endpoint: Some(String::new()),
        ..Default::default()
    };

    // WHEN
    let resolved = resolve(&base(), &overrides);

    // THEN
    assert_eq!(resolved.office.street, "12 River Rd");
    assert_eq!(resolved.office.city, "Burlington");
    assert_eq!(resolved.office.zip, "52601");
    assert!(resolved.submission_endpoint.is_empty());
}

/// **VALUE**: Verifies invalid rate overrides cannot break the non-negative tariff invariant.
#[test]
fn given_negative_rate_override_when_resolved_then_base_rate_kept() {
    let overrides = ConfigOverride {
        rates: Some(RatesOverride {
            base: Some(-5.0),
            wait_per_min: Some(f64::INFINITY),
            ..Default::default()
        }),
        ..Default::default()
    };

    let resolved = resolve(&base(), &overrides);

    assert_eq!(resolved.rates.base, 20.0);
    assert_eq!(resolved.rates.wait_per_min, 0.5);
    assert!(resolved.rates.first_invalid_field().is_none());
}

/// **VALUE**: Verifies the shared legacy key feeds both services unless a specific key is set.
#[test]
fn given_shared_key_and_specific_routing_key_when_resolved_then_specific_wins() {
    // GIVEN
    let overrides = ConfigOverride {
        ors_key: Some(ObfuscatedApiKey::encode("shared")),
        routing_api_key: Some(ObfuscatedApiKey::encode("routing-only")),
        ..Default::default()
    };

    // WHEN
    let resolved = resolve(&base(), &overrides);

    // THEN
    assert_eq!(resolved.geocode_api_key.decode().expect("decodes").expose(), "shared");
    assert_eq!(
        resolved.routing_api_key.decode().expect("decodes").expose(),
        "routing-only"
    );
}

/// **VALUE**: Verifies a blank specific key does not hide the shared legacy key.
///
/// **WHY THIS MATTERS**: The Admin form saves untouched key fields as `""`. With only
/// `orsKey` filled in, both services must still get it.
///
/// **BUG THIS CATCHES**: Would catch `Option::or` picking the empty specific key and then
/// falling back to the (empty) base key, so every request goes out unauthenticated.
#[test]
fn given_blank_specific_keys_and_shared_key_when_resolved_then_shared_key_used() {
    // GIVEN
    let overrides = ConfigOverride {
        ors_key: Some(ObfuscatedApiKey::encode("shared")),
        geocode_api_key: Some(ObfuscatedApiKey::from_encoded("")),
        routing_api_key: Some(ObfuscatedApiKey::from_encoded("  ")),
        ..Default::default()
    };

    // WHEN
    let resolved = resolve(&base(), &overrides);

    // THEN
    assert_eq!(resolved.geocode_api_key.decode().expect("decodes").expose(), "shared");
    assert_eq!(resolved.routing_api_key.decode().expect("decodes").expose(), "shared");
}

/// **VALUE**: Verifies service URLs can be redirected, e.g. to a self-hosted instance.
#[test]
fn given_services_override_when_resolved_then_urls_replaced() {
    let overrides = ConfigOverride {
        services: Some(ServicesOverride {
            geocode_url: Some(String::from("http://localhost:8080")),
            directions_url: None,
        }),
        ..Default::default()
    };

    let resolved = resolve(&base(), &overrides);

    assert_eq!(resolved.services.geocode_url, "http://localhost:8080");
    assert_eq!(resolved.services.directions_url, base().services.directions_url);
}
