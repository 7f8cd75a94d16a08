//! Test helpers for pipeline integration tests.
//!
//! A single `MockServer` stands in for both map services: geocoding is
//! matched on the `text` query parameter, routing on the coordinate pair in
//! the request body.

use quote_core::{Configuration, ServiceEndpoints};

use common::ObfuscatedApiKey;
use models::{Address, BookingRequest, BusinessProfile, Customer, QuoteRequest, Tariff};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-ors-key";

pub const OFFICE_TEXT: &str = "300 N 3rd St, Burlington, IA 52601";
pub const PICKUP_TEXT: &str = "1 Elm St, Burlington, IA 52601";
pub const DROP_TEXT: &str = "9 Oak Ave, West Burlington, IA 52655";

pub const OFFICE_LON_LAT: [f64; 2] = [-91.1, 40.8];
pub const PICKUP_LON_LAT: [f64; 2] = [-91.2, 40.9];
pub const DROP_LON_LAT: [f64; 2] = [-91.3, 40.7];

/// Configuration pointing every service at `server`.
pub fn test_config(server: &MockServer, submission_endpoint: &str) -> Configuration {
    Configuration {
        office: Address::new("300 N 3rd St", "Burlington", "IA", "52601"),
        rates: Tariff::new(20.0, 2.0, 0.5, 10.0),
        geocode_api_key: ObfuscatedApiKey::encode(TEST_API_KEY),
        routing_api_key: ObfuscatedApiKey::encode(TEST_API_KEY),
        submission_endpoint: submission_endpoint.to_string(),
        business: BusinessProfile {
            name: String::from("Burlington Courier"),
            phone: String::from("319-555-0199"),
            email: String::from("desk@example.com"),
        },
        services: ServiceEndpoints {
            geocode_url: server.uri(),
            directions_url: server.uri(),
        },
    }
}

pub fn quote_request(wait_minutes: f64) -> QuoteRequest {
    QuoteRequest {
        pickup: Address::new("1 Elm St", "Burlington", "IA", "52601"),
        drop: Address::new("9 Oak Ave", "West Burlington", "IA", "52655"),
        wait_minutes,
    }
}

pub fn booking_request(wait_minutes: f64) -> BookingRequest {
    let quote = quote_request(wait_minutes);
    BookingRequest {
        version: String::from("1"),
        service: String::from("Document Delivery"),
        other_details: String::new(),
        customer: Customer {
            name: String::from("Pat Doe"),
            phone: String::from("(319) 555-0100"),
            email: String::from("pat@example.com"),
            carrier: String::new(),
        },
        pickup: quote.pickup,
        drop: quote.drop,
        date: String::from("2026-10-17"),
        time: String::from("09:00"),
        wait_minutes,
        notes: String::from("Side door"),
    }
}

/// Mount a geocoding match for `text`.
pub async fn mount_geocode(server: &MockServer, text: &str, lon_lat: [f64; 2], label: &str) {
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("text", text))
        .and(query_param("api_key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [{
                "geometry": { "coordinates": lon_lat },
                "properties": { "label": label }
            }]
        })))
        .mount(server)
        .await;
}

/// Mount an empty geocoding result for `text`.
pub async fn mount_geocode_miss(server: &MockServer, text: &str) {
    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("text", text))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": [] })))
        .mount(server)
        .await;
}

/// Mount a directions answer for the leg `from` → `to`.
pub async fn mount_route(server: &MockServer, from: [f64; 2], to: [f64; 2], meters: f64) {
    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .and(body_json(json!({ "coordinates": [from, to] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "routes": [{ "summary": { "distance": meters } }]
        })))
        .mount(server)
        .await;
}

/// Mount all three geocodes and legs; legs sum to `16093.44` m (10 mi).
pub async fn mount_ten_mile_trip(server: &MockServer) {
    mount_geocode(server, OFFICE_TEXT, OFFICE_LON_LAT, "Office").await;
    mount_geocode(server, PICKUP_TEXT, PICKUP_LON_LAT, "Pickup").await;
    mount_geocode(server, DROP_TEXT, DROP_LON_LAT, "Drop").await;

    mount_route(server, OFFICE_LON_LAT, PICKUP_LON_LAT, 4000.0).await;
    mount_route(server, PICKUP_LON_LAT, DROP_LON_LAT, 8093.44).await;
    mount_route(server, DROP_LON_LAT, OFFICE_LON_LAT, 4000.0).await;
}
