use crate::{
    Address, BookingPayloadBuilder, BookingRequest, BusinessProfile, Customer, ModelError, Quote,
    QuoteBreakdown, Tariff, TripLegs,
};

fn request() -> BookingRequest {
    BookingRequest {
        version: String::from("1"),
        service: String::from("Document Delivery"),
        other_details: String::new(),
        customer: Customer {
            name: String::from("Pat Doe"),
            phone: String::from("319-555-0100"),
            email: String::from("pat@example.com"),
            carrier: String::new(),
        },
        pickup: Address::new("1 Elm St", "Burlington", "IA", "52601"),
        drop: Address::new("9 Oak Ave", "Burlington", "IA", "52601"),
        date: String::from("2026-10-17"),
        time: String::from("09:00"),
        wait_minutes: 25.0,
        notes: String::from("Side door"),
    }
}

fn quote() -> Quote {
    Quote {
        total_amount: 47.5,
        miles: 10.004_999,
        billable_wait_minutes: 15.0,
        breakdown: QuoteBreakdown {
            base_amount: 20.0,
            distance_amount: 20.01,
            wait_amount: 7.5,
        },
    }
}

fn legs() -> TripLegs {
    TripLegs {
        office_to_pickup: 1000.0,
        pickup_to_drop: 8000.0,
        drop_to_office: 7093.44,
    }
}

/// **VALUE**: Verifies a complete builder produces the flat payload the booking receiver reads.
///
/// **WHY THIS MATTERS**: The receiver is a spreadsheet script keyed on these exact field names.
/// A renamed key lands an empty column in the bookings sheet.
///
/// **BUG THIS CATCHES**: Would catch customer fields staying nested, legs losing their
/// `op`/`pd`/`dof` keys, or miles not being rounded to two decimals.
#[test]
fn given_complete_builder_when_built_then_payload_matches_receiver_shape() {
    // GIVEN: All parts of a booking
    let builder = BookingPayloadBuilder::default()
        .with_request(request())
        .with_quote(quote(), legs(), Tariff::new(20.0, 2.0, 0.5, 10.0))
        .with_office(Address::new("100 Office Rd", "Burlington", "IA", "52601"))
        .with_business(BusinessProfile {
            name: String::from("Courier Co"),
            phone: String::new(),
            email: String::new(),
        })
        .with_submitted_at("2026-10-16T12:00:00Z");

    // WHEN
    let payload = builder.build().expect("complete builder");
    let json = serde_json::to_value(&payload).expect("serializes");

    // THEN
    assert_eq!(json["name"], "Pat Doe");
    assert_eq!(json["waitMins"], 25.0);
    assert_eq!(json["pickup"]["address"], "1 Elm St");
    assert_eq!(json["quote"]["miles"], 10.0);
    assert_eq!(json["quote"]["total"], 47.5);
    assert_eq!(json["quote"]["legsMeters"]["dof"], 7093.44);
    assert_eq!(json["quote"]["rates"]["perMile"], 2.0);
    assert_eq!(json["office"]["city"], "Burlington");
    assert_eq!(json["business"]["name"], "Courier Co");
    assert_eq!(json["submittedAt"], "2026-10-16T12:00:00Z");
}

/// **VALUE**: Verifies a booking cannot be built without a priced quote.
///
/// **WHY THIS MATTERS**: Submitting a booking with no price would commit the business to an
/// unquoted job.
#[test]
fn given_missing_quote_when_built_then_returns_validation_error() {
    // GIVEN: Everything except the quote
    let builder = BookingPayloadBuilder::default()
        .with_request(request())
        .with_office(Address::default())
        .with_submitted_at("2026-10-16T12:00:00Z");

    // WHEN
    let result = builder.build();

    // THEN
    match result {
        Err(ModelError::Validation { message, .. }) => assert_eq!(message, "Quote is required"),
        Ok(_) => panic!("expected validation error"),
    }
}

/// **VALUE**: Verifies an empty submission timestamp is rejected.
#[test]
fn given_empty_timestamp_when_built_then_returns_validation_error() {
    let builder = BookingPayloadBuilder::default()
        .with_request(request())
        .with_quote(quote(), legs(), Tariff::new(20.0, 2.0, 0.5, 10.0))
        .with_office(Address::default())
        .with_submitted_at("");

    let result = builder.build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Submission timestamp cannot be empty")
        }
        Ok(_) => panic!("expected validation error"),
    }
}

/// **VALUE**: Verifies the business profile defaults to empty strings when not configured.
#[test]
fn given_no_business_when_built_then_business_is_empty() {
    let payload = BookingPayloadBuilder::default()
        .with_request(request())
        .with_quote(quote(), legs(), Tariff::new(20.0, 2.0, 0.5, 10.0))
        .with_office(Address::default())
        .with_submitted_at("2026-10-16T12:00:00Z")
        .build()
        .expect("business is optional");

    assert_eq!(payload.business, BusinessProfile::default());
}
