use crate::helpers::{booking_request, mount_ten_mile_trip, test_config};

use quote_core::error::BookingError;
use quote_core::{CoreError, QuoteEngine};

use reqwest::Client;
use serde_json::{Value, json};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies an unconfigured endpoint refuses the booking with no network call at all.
///
/// **WHY THIS MATTERS**: Geocoding and routing cost API quota. A booking that cannot be
/// delivered must not spend it.
///
/// **BUG THIS CATCHES**: Would catch the endpoint check running after the re-quote, or the
/// payload being posted to a relative URL.
#[tokio::test]
async fn given_empty_endpoint_when_booked_then_refused_without_requests() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = test_config(&server, "");

    // WHEN
    let result = QuoteEngine::with_client(Client::new())
        .book(&booking_request(0.0), &config)
        .await;

    // THEN
    let error = result.expect_err("booking must be refused");
    assert!(matches!(error, CoreError::Booking(BookingError::Endpoint { .. })));
    assert_eq!(
        error.user_message(),
        "Admin: Please set the booking endpoint URL in Admin."
    );
}

/// **VALUE**: Verifies the payload is posted as JSON text with the re-computed quote.
#[tokio::test]
async fn given_configured_endpoint_when_booked_then_payload_posted() {
    // GIVEN
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(header("content-type", "text/plain;charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "row": 42 })))
        .expect(1)
        .mount(&server)
        .await;
    let config = test_config(&server, &format!("{}/bookings", server.uri()));

    // WHEN
    let confirmation = QuoteEngine::with_client(Client::new())
        .book(&booking_request(25.0), &config)
        .await
        .expect("booking succeeds");

    // THEN
    assert_eq!(confirmation.receipt, json!({ "ok": true, "row": 42 }));
    assert!((confirmation.total_amount - 47.5).abs() < 1e-9);

    let requests = server.received_requests().await.expect("recording enabled");
    let booking = requests
        .iter()
        .find(|request| request.url.path() == "/bookings")
        .expect("booking was posted");
    let payload: Value = serde_json::from_slice(&booking.body).expect("body is JSON text");

    assert_eq!(payload["name"], "Pat Doe");
    assert_eq!(payload["waitMins"], 25.0);
    assert_eq!(payload["quote"]["miles"], 10.0);
    assert_eq!(payload["quote"]["legsMeters"]["pd"], 8093.44);
    assert_eq!(payload["quote"]["rates"]["perMile"], 2.0);
    assert_eq!(payload["office"]["zip"], "52601");
    assert_eq!(payload["business"]["name"], "Burlington Courier");
    assert_eq!(payload["submittedAt"], confirmation.submitted_at.as_str());
}

/// **VALUE**: Verifies a non-success answer surfaces status and body.
#[tokio::test]
async fn given_receiver_error_when_booked_then_rejected_with_body() {
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Sheet is locked"))
        .mount(&server)
        .await;
    let config = test_config(&server, &format!("{}/bookings", server.uri()));

    let error = QuoteEngine::with_client(Client::new())
        .book(&booking_request(0.0), &config)
        .await
        .expect_err("booking must fail");

    assert_eq!(error.user_message(), "Error sending booking: 500 Sheet is locked");
    match error {
        CoreError::Booking(BookingError::Rejected { status, .. }) => {
            assert!(status.is_server_error());
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// **VALUE**: Verifies missing booking fields fail before the endpoint is contacted.
#[tokio::test]
async fn given_missing_name_when_booked_then_validation_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = test_config(&server, &format!("{}/bookings", server.uri()));
    let mut request = booking_request(0.0);
    request.customer.name = String::new();

    let error = QuoteEngine::with_client(Client::new())
        .book(&request, &config)
        .await
        .expect_err("booking must fail");

    assert_eq!(error.user_message(), "Please complete all required fields.");
}
