use crate::helpers::{PICKUP_LON_LAT, PICKUP_TEXT, TEST_API_KEY, mount_geocode, mount_geocode_miss};

use quote_core::error::GeocodeError;
use quote_core::geocoder::Geocoder;

use common::RedactedApiKey;

use reqwest::Client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the request shape and that `[lon, lat]` lands as `lat`/`lon`.
///
/// **BUG THIS CATCHES**: Would catch swapped coordinates, which put every pickup in
/// Antarctica and still return a (wrong) route distance.
#[tokio::test]
async fn given_match_when_geocoded_then_point_has_lat_lon_and_label() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("boundary.country", "US"))
        .and(query_param("size", "1"))
        .and(query_param("text", PICKUP_TEXT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [{
                "geometry": { "coordinates": PICKUP_LON_LAT },
                "properties": { "label": "1 Elm St, Burlington, IA, USA" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let geocoder = Geocoder::new(&server.uri(), Client::new()).expect("valid base url");

    // WHEN
    let point = geocoder
        .geocode(PICKUP_TEXT, &RedactedApiKey::new(TEST_API_KEY))
        .await
        .expect("geocode succeeds");

    // THEN
    assert_eq!(point.lon, PICKUP_LON_LAT[0]);
    assert_eq!(point.lat, PICKUP_LON_LAT[1]);
    assert_eq!(point.label, "1 Elm St, Burlington, IA, USA");
}

/// **VALUE**: Verifies a missing label falls back to the input address.
#[tokio::test]
async fn given_match_without_label_when_geocoded_then_label_is_input() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [{ "geometry": { "coordinates": [-91.2, 40.9] } }]
        })))
        .mount(&server)
        .await;

    let geocoder = Geocoder::new(&server.uri(), Client::new()).expect("valid base url");
    let point = geocoder
        .geocode(PICKUP_TEXT, &RedactedApiKey::new(TEST_API_KEY))
        .await
        .expect("geocode succeeds");

    assert_eq!(point.label, PICKUP_TEXT);
}

/// **VALUE**: Verifies zero features is `AddressNotFound` naming the address.
#[tokio::test]
async fn given_no_features_when_geocoded_then_address_not_found() {
    let server = MockServer::start().await;
    mount_geocode_miss(&server, PICKUP_TEXT).await;

    let geocoder = Geocoder::new(&server.uri(), Client::new()).expect("valid base url");
    let result = geocoder
        .geocode(PICKUP_TEXT, &RedactedApiKey::new(TEST_API_KEY))
        .await;

    match result {
        Err(GeocodeError::AddressNotFound { address, .. }) => assert_eq!(address, PICKUP_TEXT),
        other => panic!("expected AddressNotFound, got {other:?}"),
    }
}

/// **VALUE**: Verifies HTTP failures carry the status.
#[tokio::test]
async fn given_service_error_when_geocoded_then_service_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let geocoder = Geocoder::new(&server.uri(), Client::new()).expect("valid base url");
    let result = geocoder
        .geocode(PICKUP_TEXT, &RedactedApiKey::new("wrong"))
        .await;

    match result {
        Err(GeocodeError::Service { status, body, .. }) => {
            assert_eq!(status.0, 401);
            assert!(status.is_client_error());
            assert_eq!(body, "bad key");
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

/// **VALUE**: Verifies helper-mounted matches are found by text.
#[tokio::test]
async fn given_mounted_match_when_geocoded_then_ok() {
    let server = MockServer::start().await;
    mount_geocode(&server, PICKUP_TEXT, PICKUP_LON_LAT, "Pickup").await;

    let geocoder = Geocoder::new(&server.uri(), Client::new()).expect("valid base url");
    let point = geocoder
        .geocode(PICKUP_TEXT, &RedactedApiKey::new(TEST_API_KEY))
        .await
        .expect("geocode succeeds");

    assert_eq!(point.label, "Pickup");
}
