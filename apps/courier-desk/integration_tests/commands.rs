use crate::helpers::{
    app_state, booking_request, mock_overrides, mount_ten_mile_trip, quote_request,
};

use courier_desk::commands::booking::submit_booking;
use courier_desk::commands::config::{current_configuration, reset_overrides, save_overrides};
use courier_desk::commands::quote::calculate_quote;
use courier_desk::error::DeskError;

use quote_core::config::ConfigOverride;
use quote_core::config::overrides::RatesOverride;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Desk commands end to end: override store on disk, map services mocked
// ============================================================================

/// **VALUE**: Verifies a saved per-mile override is used by the very next quote.
///
/// **WHY THIS MATTERS**: Admin changes rates during the day; the desk must not keep
/// quoting with the old tariff until restart.
#[tokio::test]
async fn given_saved_rate_override_when_quoted_then_override_applies() {
    // GIVEN
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    let config_dir = tempfile::tempdir().expect("temp dir");
    let state = app_state(&config_dir);

    let mut overrides = mock_overrides(&server);
    overrides.rates = Some(RatesOverride {
        per_mile: Some(3.0),
        ..RatesOverride::default()
    });
    let config = save_overrides(&state, overrides).expect("overrides saved");
    assert_eq!(config.rates.per_mile, 3.0);

    // WHEN
    let outcome = calculate_quote(&state, quote_request(0.0))
        .await
        .expect("quote succeeds");

    // THEN
    assert_eq!(outcome.summary.total, "$50.00");
    assert_eq!(state.get_quote().await, Some(outcome));
}

/// **VALUE**: Verifies a failed quote keeps the previous session quote.
#[tokio::test]
async fn given_previous_quote_when_next_quote_fails_then_state_unchanged() {
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    let config_dir = tempfile::tempdir().expect("temp dir");
    let state = app_state(&config_dir);
    save_overrides(&state, mock_overrides(&server)).expect("overrides saved");

    let first = calculate_quote(&state, quote_request(0.0))
        .await
        .expect("quote succeeds");

    let mut bad = quote_request(0.0);
    bad.drop.zip = String::from("526");
    let error = calculate_quote(&state, bad).await.expect_err("bad ZIP");

    assert_eq!(error.message(), "Drop-off ZIP looks invalid.");
    assert_eq!(state.get_quote().await, Some(first));
}

/// **VALUE**: Verifies booking is refused until a quote exists.
#[tokio::test]
async fn given_no_quote_when_booking_submitted_then_no_quote_error() {
    let config_dir = tempfile::tempdir().expect("temp dir");
    let state = app_state(&config_dir);

    let result = submit_booking(&state, booking_request(0.0)).await;

    assert!(matches!(result, Err(DeskError::NoQuote { .. })));
}

/// **VALUE**: Verifies a booking made straight after a quote posts once and resets the session.
///
/// **BUG THIS CATCHES**: Would catch the session quote being stored after the quote command
/// returns (booking refused with `NoQuote`), or a stale quote surviving a booking so the next
/// customer is booked against the previous customer's price.
#[tokio::test]
async fn given_quote_when_booking_submitted_then_posted_and_quote_cleared() {
    // GIVEN
    let server = MockServer::start().await;
    mount_ten_mile_trip(&server).await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let config_dir = tempfile::tempdir().expect("temp dir");
    let state = app_state(&config_dir);
    save_overrides(&state, mock_overrides(&server)).expect("overrides saved");
    calculate_quote(&state, quote_request(25.0))
        .await
        .expect("quote succeeds");

    // WHEN
    let confirmation = submit_booking(&state, booking_request(25.0))
        .await
        .expect("booking succeeds");

    // THEN
    assert_eq!(confirmation.receipt, json!({ "ok": true }));
    assert!(state.get_quote().await.is_none());
}

/// **VALUE**: Verifies invalid rate overrides are refused and nothing is stored.
#[tokio::test]
async fn given_negative_rate_when_saved_then_refused_and_defaults_kept() {
    let config_dir = tempfile::tempdir().expect("temp dir");
    let state = app_state(&config_dir);
    let before = current_configuration(&state).expect("defaults load");

    let overrides = ConfigOverride {
        rates: Some(RatesOverride {
            base: Some(-5.0),
            ..RatesOverride::default()
        }),
        ..ConfigOverride::default()
    };
    let error = save_overrides(&state, overrides).expect_err("negative base");

    assert!(error.message().contains("base"));
    assert_eq!(current_configuration(&state).expect("defaults load"), before);
}

/// **VALUE**: Verifies reset returns to the compiled-in defaults.
#[tokio::test]
async fn given_saved_overrides_when_reset_then_defaults_restored() {
    let server = MockServer::start().await;
    let config_dir = tempfile::tempdir().expect("temp dir");
    let state = app_state(&config_dir);
    let defaults = current_configuration(&state).expect("defaults load");

    let saved = save_overrides(&state, mock_overrides(&server)).expect("overrides saved");
    assert_ne!(saved, defaults);

    let reset = reset_overrides(&state).expect("reset succeeds");

    assert_eq!(reset, defaults);
}
