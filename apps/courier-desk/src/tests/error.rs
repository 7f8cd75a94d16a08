// Unit tests for desk error serialization

use crate::error::DeskError;

use common::{ErrorLocation, HttpStatusCode};
use quote_core::CoreError;
use quote_core::error::BookingError;

use std::panic::Location;

/// **VALUE**: Verifies errors serialize as `{ type, data }` for the form.
///
/// **BUG THIS CATCHES**: Would catch dropping `#[derive(Serialize)]` or the tag/content
/// attributes, which changes the shape the form reads.
#[test]
fn given_desk_error_when_serialized_then_tagged_with_variant() {
    // GIVEN
    let err = DeskError::NoQuote {
        message: String::from("Please calculate a quote first."),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN
    let json = serde_json::to_value(&err).expect("serializable");

    // THEN
    assert_eq!(json["type"], "NoQuote");
    assert_eq!(json["data"]["message"], "Please calculate a quote first.");
    assert!(json["data"]["location"]["line"].is_u64());
}

/// **VALUE**: Verifies core errors are carried with their user-facing message.
#[test]
fn given_core_error_when_wrapped_then_message_is_user_message() {
    let core = CoreError::from(BookingError::Rejected {
        status: HttpStatusCode(503),
        body: String::from("try later"),
        location: ErrorLocation::from(Location::caller()),
    });

    let err = DeskError::core(&core);

    assert_eq!(err.message(), "Error sending booking: 503 try later");
    assert!(err.to_string().starts_with("Core Error: Error sending booking"));
}
