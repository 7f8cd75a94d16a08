use crate::helpers::{
    DROP_LON_LAT, DROP_TEXT, OFFICE_LON_LAT, OFFICE_TEXT, PICKUP_LON_LAT, PICKUP_TEXT,
    mount_geocode, mount_geocode_miss, mount_route, mount_ten_mile_trip, test_config,
};

use quote_core::CoreError;
use quote_core::error::{GeocodeError, RouteError};
use quote_core::trip::TripAggregator;

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_trip_points(server: &MockServer) {
    mount_geocode(server, OFFICE_TEXT, OFFICE_LON_LAT, "Office").await;
    mount_geocode(server, PICKUP_TEXT, PICKUP_LON_LAT, "Pickup").await;
    mount_geocode(server, DROP_TEXT, DROP_LON_LAT, "Drop").await;
}

async fn mount_delayed_route(
    server: &MockServer,
    from: [f64; 2],
    to: [f64; 2],
    meters: f64,
    delay_ms: u64,
) {
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .and(body_json(json!({ "coordinates": [from, to] })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "routes": [{ "summary": { "distance": meters } }] }))
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

/// **VALUE**: Verifies the three legs are measured in round-trip order and summed.
#[tokio::test]
async fn given_resolvable_addresses_when_trip_computed_then_legs_summed() {
    // GIVEN
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    let config = test_config(&server, "");
    let aggregator = TripAggregator::from_config(&config, Client::new()).expect("valid config");

    // WHEN
    let trip = aggregator
        .compute_trip(OFFICE_TEXT, PICKUP_TEXT, DROP_TEXT, &config)
        .await
        .expect("trip succeeds");

    // THEN
    assert_eq!(trip.legs.office_to_pickup, 4000.0);
    assert_eq!(trip.legs.pickup_to_drop, 8093.44);
    assert_eq!(trip.legs.drop_to_office, 4000.0);
    assert!((trip.total_meters - 16093.44).abs() < 1e-6);
    assert_eq!(trip.points.office.label, "Office");
    assert_eq!(trip.points.drop.label, "Drop");
}

/// **VALUE**: Verifies one unresolvable address fails the whole trip before routing.
///
/// **WHY THIS MATTERS**: A partial trip must never be priced. Routing is gated on all three
/// geocodes, so the directions service is never asked.
///
/// **BUG THIS CATCHES**: Would catch routing from a default point or summing only the legs
/// that could be measured.
#[tokio::test]
async fn given_pickup_not_found_when_trip_computed_then_address_not_found_and_no_routing() {
    // GIVEN
    let server = MockServer::start().await;
    mount_geocode(&server, OFFICE_TEXT, OFFICE_LON_LAT, "Office").await;
    mount_geocode_miss(&server, PICKUP_TEXT).await;
    mount_geocode(&server, DROP_TEXT, PICKUP_LON_LAT, "Drop").await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server, "");
    let aggregator = TripAggregator::from_config(&config, Client::new()).expect("valid config");

    // WHEN
    let result = aggregator
        .compute_trip(OFFICE_TEXT, PICKUP_TEXT, DROP_TEXT, &config)
        .await;

    // THEN
    match result {
        Err(CoreError::Geocode(GeocodeError::AddressNotFound { address, .. })) => {
            assert_eq!(address, PICKUP_TEXT);
        }
        other => panic!("expected AddressNotFound, got {other:?}"),
    }
}

/// **VALUE**: Verifies an undecodable key is a configuration error raised before any request.
#[tokio::test]
async fn given_corrupt_key_when_trip_computed_then_config_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config(&server, "");
    config.geocode_api_key = common::ObfuscatedApiKey::from_encoded("%%% not base64 %%%");
    let aggregator = TripAggregator::from_config(&config, Client::new()).expect("valid config");

    let result = aggregator
        .compute_trip(OFFICE_TEXT, PICKUP_TEXT, DROP_TEXT, &config)
        .await;

    assert!(matches!(result, Err(CoreError::Config(_))));
}

/// **VALUE**: Verifies one failing leg fails the whole trip with that leg's error.
///
/// **WHY THIS MATTERS**: Two good legs out of three is not a trip. Pricing the partial sum
/// would undercharge by the missing leg.
///
/// **BUG THIS CATCHES**: Would catch legs joined with `join!` and errors dropped, or a
/// failed leg counted as zero meters.
#[tokio::test]
async fn given_middle_leg_fails_when_trip_computed_then_route_error_and_no_trip() {
    // GIVEN
    let server = MockServer::start().await;
    mount_trip_points(&server).await;
    mount_route(&server, OFFICE_LON_LAT, PICKUP_LON_LAT, 4000.0).await;
    mount_route(&server, DROP_LON_LAT, OFFICE_LON_LAT, 4000.0).await;
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .and(body_json(json!({ "coordinates": [PICKUP_LON_LAT, DROP_LON_LAT] })))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream timeout"))
        .mount(&server)
        .await;

    let config = test_config(&server, "");
    let aggregator = TripAggregator::from_config(&config, Client::new()).expect("valid config");

    // WHEN
    let result = aggregator
        .compute_trip(OFFICE_TEXT, PICKUP_TEXT, DROP_TEXT, &config)
        .await;

    // THEN
    match result {
        Err(CoreError::Route(RouteError::Service { status, body, .. })) => {
            assert_eq!(status.0, 500);
            assert_eq!(body, "upstream timeout");
        }
        other => panic!("expected routing service error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the total does not depend on which leg answers first.
///
/// **BUG THIS CATCHES**: Would catch legs assigned by completion order instead of by
/// position, which swaps `office_to_pickup` and `drop_to_office` in the booking payload.
#[tokio::test]
async fn given_legs_finish_out_of_order_when_trip_computed_then_legs_and_total_unchanged() {
    // GIVEN: The last leg answers first, the first leg answers last
    let server = MockServer::start().await;
    mount_trip_points(&server).await;
    mount_delayed_route(&server, OFFICE_LON_LAT, PICKUP_LON_LAT, 4000.0, 150).await;
    mount_delayed_route(&server, PICKUP_LON_LAT, DROP_LON_LAT, 8093.44, 75).await;
    mount_delayed_route(&server, DROP_LON_LAT, OFFICE_LON_LAT, 3000.0, 0).await;

    let config = test_config(&server, "");
    let aggregator = TripAggregator::from_config(&config, Client::new()).expect("valid config");

    // WHEN
    let trip = aggregator
        .compute_trip(OFFICE_TEXT, PICKUP_TEXT, DROP_TEXT, &config)
        .await
        .expect("trip succeeds");

    // THEN
    assert_eq!(trip.legs.office_to_pickup, 4000.0);
    assert_eq!(trip.legs.pickup_to_drop, 8093.44);
    assert_eq!(trip.legs.drop_to_office, 3000.0);
    assert!((trip.total_meters - 15093.44).abs() < 1e-6);
}
