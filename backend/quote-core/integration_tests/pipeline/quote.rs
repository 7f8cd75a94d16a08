use crate::helpers::{mount_ten_mile_trip, quote_request, test_config};

use quote_core::error::ValidationError;
use quote_core::{CoreError, QuoteEngine};

use reqwest::Client;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a ten-mile trip inside the free wait prices at base plus distance.
///
/// **WHY THIS MATTERS**: This is the common case at the desk. The display total is what the
/// customer is told over the phone.
#[tokio::test]
async fn given_ten_mile_trip_and_free_wait_when_quoted_then_forty_dollars() {
    // GIVEN
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    let config = test_config(&server, "");
    let engine = QuoteEngine::with_client(Client::new());

    // WHEN
    let outcome = engine
        .calculate_quote(&quote_request(10.0), &config)
        .await
        .expect("quote succeeds");

    // THEN
    assert_eq!(outcome.summary.total, "$40.00");
    assert_eq!(outcome.summary.distance, "10.0 mi");
    assert_eq!(outcome.quote.billable_wait_minutes, 0.0);
    assert!((outcome.quote.total_amount - 40.0).abs() < 1e-9);
}

/// **VALUE**: Verifies wait beyond the free allowance is billed per minute.
#[tokio::test]
async fn given_twenty_five_minute_wait_when_quoted_then_forty_seven_fifty() {
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    let config = test_config(&server, "");
    let engine = QuoteEngine::with_client(Client::new());

    let outcome = engine
        .calculate_quote(&quote_request(25.0), &config)
        .await
        .expect("quote succeeds");

    assert_eq!(outcome.summary.total, "$47.50");
    assert_eq!(outcome.quote.billable_wait_minutes, 15.0);
    assert_eq!(outcome.quote.breakdown.wait_amount, 7.5);
    assert_eq!(
        outcome.summary.to_string(),
        "Base: $20.00 · Distance: 10.0 mi × $2.00/mi = $20.00 · Wait: 25 min (first 10 free) = $7.50"
    );
}

/// **VALUE**: Verifies invalid input is rejected with no network traffic.
#[tokio::test]
async fn given_bad_zip_when_quoted_then_validation_error_without_requests() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = test_config(&server, "");
    let mut request = quote_request(0.0);
    request.pickup.zip = String::from("ABCDE");

    // WHEN
    let result = QuoteEngine::with_client(Client::new())
        .calculate_quote(&request, &config)
        .await;

    // THEN
    assert!(matches!(
        result,
        Err(CoreError::Validation(ValidationError::InvalidFormat { field: "pickupZip", .. }))
    ));
}

/// **VALUE**: Verifies two calls with different snapshots price independently.
///
/// **BUG THIS CATCHES**: Would catch the engine caching rates from the first call.
#[tokio::test]
async fn given_changed_rates_when_quoted_again_then_new_rates_apply() {
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    let engine = QuoteEngine::with_client(Client::new());

    let config = test_config(&server, "");
    let mut dearer = config.clone();
    dearer.rates.per_mile = 3.0;

    let first = engine
        .calculate_quote(&quote_request(0.0), &config)
        .await
        .expect("quote succeeds");
    let second = engine
        .calculate_quote(&quote_request(0.0), &dearer)
        .await
        .expect("quote succeeds");

    assert_eq!(first.summary.total, "$40.00");
    assert_eq!(second.summary.total, "$50.00");
}
