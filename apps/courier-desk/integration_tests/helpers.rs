//! Shared fixtures: a mock map service and an override store pointing at it.

use courier_desk::state::AppState;

use common::ObfuscatedApiKey;
use models::{Address, BookingRequest, Customer, QuoteRequest};
use quote_core::QuoteEngine;
use quote_core::config::ConfigOverride;
use quote_core::config::overrides::ServicesOverride;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OFFICE: ([f64; 2], &str) = ([-91.1, 40.8], "300 N 3rd St, Burlington, IA 52601");
const PICKUP: ([f64; 2], &str) = ([-91.2, 40.9], "1 Elm St, Burlington, IA 52601");
const DROP: ([f64; 2], &str) = ([-91.3, 40.7], "9 Oak Ave, West Burlington, IA 52655");

pub fn app_state(config_dir: &TempDir) -> AppState {
    AppState::new(
        config_dir.path(),
        QuoteEngine::with_client(reqwest::Client::new()),
    )
}

/// Overrides sending both map services and bookings to `server`.
pub fn mock_overrides(server: &MockServer) -> ConfigOverride {
    ConfigOverride {
        ors_key: Some(ObfuscatedApiKey::encode("desk-key")),
        submission_endpoint: Some(format!("{}/bookings", server.uri())),
        services: Some(ServicesOverride {
            geocode_url: Some(server.uri()),
            directions_url: Some(server.uri()),
        }),
        ..ConfigOverride::default()
    }
}

/// Mount geocodes for office, pickup and drop-off and three legs summing to ten miles.
pub async fn mount_ten_mile_trip(server: &MockServer) {
    for (lon_lat, text) in [OFFICE, PICKUP, DROP] {
        Mock::given(method("GET"))
            .and(path("/geocode/search"))
            .and(query_param("text", text))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "features": [{ "geometry": { "coordinates": lon_lat }, "properties": { "label": text } }]
            })))
            .mount(server)
            .await;
    }

    for (from, to, meters) in [
        (OFFICE.0, PICKUP.0, 4000.0),
        (PICKUP.0, DROP.0, 8093.44),
        (DROP.0, OFFICE.0, 4000.0),
    ] {
        Mock::given(method("POST"))
            .and(path("/v2/directions/driving-car"))
            .and(body_json(json!({ "coordinates": [from, to] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routes": [{ "summary": { "distance": meters } }]
            })))
            .mount(server)
            .await;
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
        service: String::from("Parcel"),
        other_details: String::new(),
        customer: Customer {
            name: String::from("Sam Roe"),
            phone: String::from("319.555.0142"),
            email: String::from("sam@example.com"),
            carrier: String::new(),
        },
        pickup: quote.pickup,
        drop: quote.drop,
        date: String::from("2026-10-19"),
        time: String::from("14:30"),
        wait_minutes,
        notes: String::new(),
    }
}
