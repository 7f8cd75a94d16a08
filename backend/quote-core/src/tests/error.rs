// Unit tests for error formatting and user-facing messages

use crate::error::{BookingError, CoreError, GeocodeError, RouteError, ValidationError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies wrapped errors keep the stage's own message and location.
///
/// **WHY THIS MATTERS**: `CoreError` must not reword what failed. The log line for a failed
/// quote should name the failing stage and where it was raised.
#[test]
fn given_geocode_error_when_wrapped_then_display_is_unchanged() {
    // GIVEN
    let inner = GeocodeError::AddressNotFound {
        address: String::from("1 Nowhere Ln, Burlington, IA 52601"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = inner.to_string();

    // WHEN
    let wrapped = CoreError::from(inner);

    // THEN
    assert_eq!(wrapped.to_string(), expected);
    assert!(expected.contains("Address Not Found Error"));
    assert!(expected.contains("error.rs"));
}

/// **VALUE**: Verifies the single human-readable message for each failure class.
#[test]
fn given_core_errors_when_user_message_requested_then_no_locations_leak() {
    let location = ErrorLocation::from(Location::caller());

    let routing = CoreError::from(RouteError::Service {
        status: HttpStatusCode(403),
        body: String::from("Access to this API has been disallowed"),
        location,
    });
    let rejected = CoreError::from(BookingError::Rejected {
        status: HttpStatusCode(500),
        body: String::from("boom"),
        location,
    });
    let missing = CoreError::from(ValidationError::MissingField {
        field: "name",
        location,
    });

    assert_eq!(
        routing.user_message(),
        "Routing failed: Access to this API has been disallowed"
    );
    assert_eq!(rejected.user_message(), "Error sending booking: 500 boom");
    assert_eq!(missing.user_message(), "Please complete all required fields.");
    assert!(!routing.user_message().contains("error.rs"));
}
