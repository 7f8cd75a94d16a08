// Unit tests for form validation

use crate::error::validation::ValidationError;
use crate::validation::{validate_booking_request, validate_phone, validate_quote_request};

use models::{Address, BookingRequest, Customer, QuoteRequest};

fn quote_request() -> QuoteRequest {
    QuoteRequest {
        pickup: Address::new("1 Elm St", "Burlington", "IA", "52601"),
        drop: Address::new("9 Oak Ave", "West Burlington", "IA", "52655-1234"),
        wait_minutes: 0.0,
    }
}

fn booking_request() -> BookingRequest {
    let quote = quote_request();
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
        wait_minutes: 0.0,
        notes: String::new(),
    }
}

/// **VALUE**: Verifies complete inputs pass, including a ZIP+4.
#[test]
fn given_complete_inputs_when_validated_then_ok() {
    assert!(validate_quote_request(&quote_request()).is_ok());
    assert!(validate_booking_request(&booking_request()).is_ok());
}

/// **VALUE**: Verifies a blank pickup street is reported by field name.
///
/// **WHY THIS MATTERS**: Geocoding ", Burlington, IA 52601" succeeds with the city centroid
/// and quietly prices the wrong trip. It has to be caught before the network.
#[test]
fn given_blank_pickup_street_when_validated_then_missing_field() {
    // GIVEN
    let mut request = quote_request();
    request.pickup.street = String::from("  ");

    // WHEN
    let result = validate_quote_request(&request);

    // THEN
    match result {
        Err(ValidationError::MissingField { field, .. }) => assert_eq!(field, "pickupAddress"),
        other => panic!("expected missing field, got {other:?}"),
    }
}

/// **VALUE**: Verifies malformed ZIPs are rejected with the form's wording.
#[test]
fn given_bad_drop_zip_when_validated_then_invalid_format() {
    let mut request = quote_request();
    request.drop.zip = String::from("5260");

    match validate_quote_request(&request) {
        Err(ValidationError::InvalidFormat { field, message, .. }) => {
            assert_eq!(field, "dropZip");
            assert_eq!(message, "Drop-off ZIP looks invalid.");
        }
        other => panic!("expected invalid format, got {other:?}"),
    }
}

/// **VALUE**: Verifies negative wait passes validation (pricing clamps it).
#[test]
fn given_negative_wait_when_validated_then_accepted() {
    let mut request = quote_request();
    request.wait_minutes = -5.0;

    assert!(validate_quote_request(&request).is_ok());
}

/// **VALUE**: Verifies a NaN wait time is rejected.
#[test]
fn given_nan_wait_when_validated_then_invalid_format() {
    let mut request = quote_request();
    request.wait_minutes = f64::NAN;

    assert!(matches!(
        validate_quote_request(&request),
        Err(ValidationError::InvalidFormat { field: "wait", .. })
    ));
}

/// **VALUE**: Verifies phone numbers need ten digits, formatting ignored.
#[test]
fn given_phone_numbers_when_validated_then_ten_digits_required() {
    assert!(validate_phone("319-555-0100").is_ok());
    assert!(validate_phone("+1 (319) 555 0100").is_ok());
    assert!(validate_phone("555-0100").is_err());
}

/// **VALUE**: Verifies booking-only required fields are checked.
#[test]
fn given_missing_email_when_booking_validated_then_missing_field() {
    let mut request = booking_request();
    request.customer.email = String::new();

    match validate_booking_request(&request) {
        Err(ValidationError::MissingField { field, .. }) => assert_eq!(field, "email"),
        other => panic!("expected missing field, got {other:?}"),
    }
}
