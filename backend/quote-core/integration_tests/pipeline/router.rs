use crate::helpers::{DROP_LON_LAT, PICKUP_LON_LAT, TEST_API_KEY, mount_route};

use quote_core::error::RouteError;
use quote_core::router::Router;

use common::RedactedApiKey;
use models::GeoPoint;

use reqwest::Client;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn point(lon_lat: [f64; 2], label: &str) -> GeoPoint {
    GeoPoint::new(lon_lat[1], lon_lat[0], label)
}

/// **VALUE**: Verifies the leg is posted as `[[lon, lat], [lon, lat]]` and the first route's
/// distance comes back in meters.
#[tokio::test]
async fn given_route_when_measured_then_returns_summary_distance() {
    // GIVEN
    let server = MockServer::start().await;
    mount_route(&server, PICKUP_LON_LAT, DROP_LON_LAT, 8093.44).await;
    let router = Router::new(&server.uri(), Client::new()).expect("valid base url");

    // WHEN
    let meters = router
        .route_distance(
            &point(PICKUP_LON_LAT, "Pickup"),
            &point(DROP_LON_LAT, "Drop"),
            &RedactedApiKey::new(TEST_API_KEY),
        )
        .await
        .expect("route succeeds");

    // THEN
    assert_eq!(meters, 8093.44);
}

/// **VALUE**: Verifies a route without `distance` counts as zero meters.
///
/// **WHY THIS MATTERS**: The service omits the field when pickup and drop-off coincide.
#[tokio::test]
async fn given_route_without_distance_when_measured_then_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "routes": [{ "summary": {} }] })),
        )
        .mount(&server)
        .await;

    let router = Router::new(&server.uri(), Client::new()).expect("valid base url");
    let meters = router
        .route_distance(
            &point(PICKUP_LON_LAT, "Pickup"),
            &point(PICKUP_LON_LAT, "Pickup"),
            &RedactedApiKey::new(TEST_API_KEY),
        )
        .await
        .expect("route succeeds");

    assert_eq!(meters, 0.0);
}

/// **VALUE**: Verifies the response body is kept on non-success status.
#[tokio::test]
async fn given_service_error_when_measured_then_body_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Route could not be found"))
        .mount(&server)
        .await;

    let router = Router::new(&server.uri(), Client::new()).expect("valid base url");
    let result = router
        .route_distance(
            &point(PICKUP_LON_LAT, "Pickup"),
            &point(DROP_LON_LAT, "Drop"),
            &RedactedApiKey::new(TEST_API_KEY),
        )
        .await;

    match result {
        Err(RouteError::Service { status, body, .. }) => {
            assert_eq!(status.0, 404);
            assert!(status.is_client_error());
            assert_eq!(body, "Route could not be found");
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

/// **VALUE**: Verifies an empty route list is `NoRoute`, not a zero-mile trip.
///
/// **BUG THIS CATCHES**: Would catch pricing an unreachable drop-off at the base fee.
#[tokio::test]
async fn given_no_routes_when_measured_then_no_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "routes": [] })))
        .mount(&server)
        .await;

    let router = Router::new(&server.uri(), Client::new()).expect("valid base url");
    let result = router
        .route_distance(
            &point(PICKUP_LON_LAT, "Pickup"),
            &point(DROP_LON_LAT, "Drop"),
            &RedactedApiKey::new(TEST_API_KEY),
        )
        .await;

    assert!(matches!(result, Err(RouteError::NoRoute { .. })));
}
