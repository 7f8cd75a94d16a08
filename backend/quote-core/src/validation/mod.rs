//! Form checks run before any network call.

use crate::error::validation::ValidationError;

use common::ErrorLocation;
use models::{Address, BookingRequest, QuoteRequest};

use std::panic::Location;
use std::sync::OnceLock;

use regex::Regex;

const ZIP_PATTERN: &str = r"^\d{5}(-\d{4})?$";
const PHONE_DIGITS_PATTERN: &str = r"[0-9]{10}";

static ZIP_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn zip_regex() -> &'static Regex {
    ZIP_REGEX.get_or_init(|| Regex::new(ZIP_PATTERN).expect("valid regex pattern"))
}

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(PHONE_DIGITS_PATTERN).expect("valid regex pattern"))
}

/// Check the inputs a quote needs: both addresses complete, ZIPs well-formed,
/// wait time a real number.
///
/// Negative wait is accepted; pricing clamps it to zero billable minutes.
#[track_caller]
pub fn validate_quote_request(request: &QuoteRequest) -> Result<(), ValidationError> {
    validate_address(&request.pickup, AddressRole::Pickup)?;
    validate_address(&request.drop, AddressRole::Drop)?;
    validate_wait(request.wait_minutes)
}

/// Check every required booking field, then the quote inputs and phone.
#[track_caller]
pub fn validate_booking_request(request: &BookingRequest) -> Result<(), ValidationError> {
    require("service", &request.service)?;
    require("name", &request.customer.name)?;
    require("phone", &request.customer.phone)?;
    require("email", &request.customer.email)?;
    require_address(&request.pickup, AddressRole::Pickup)?;
    require_address(&request.drop, AddressRole::Drop)?;
    require("date", &request.date)?;
    require("time", &request.time)?;

    validate_quote_request(&request.quote_request())?;
    validate_phone(&request.customer.phone)
}

/// At least ten digits once punctuation and spaces are stripped.
#[track_caller]
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if !phone_regex().is_match(&digits) {
        return Err(ValidationError::InvalidFormat {
            field: "phone",
            message: String::from("Phone looks invalid."),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum AddressRole {
    Pickup,
    Drop,
}

impl AddressRole {
    fn fields(self) -> [&'static str; 4] {
        match self {
            AddressRole::Pickup => ["pickupAddress", "pickupCity", "pickupState", "pickupZip"],
            AddressRole::Drop => ["dropAddress", "dropCity", "dropState", "dropZip"],
        }
    }

    fn zip_message(self) -> &'static str {
        match self {
            AddressRole::Pickup => "Pickup ZIP looks invalid.",
            AddressRole::Drop => "Drop-off ZIP looks invalid.",
        }
    }
}

#[track_caller]
fn validate_address(address: &Address, role: AddressRole) -> Result<(), ValidationError> {
    require_address(address, role)?;

    if !zip_regex().is_match(address.zip.trim()) {
        return Err(ValidationError::InvalidFormat {
            field: role.fields()[3],
            message: String::from(role.zip_message()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
fn require_address(address: &Address, role: AddressRole) -> Result<(), ValidationError> {
    let [street, city, state, zip] = role.fields();
    require(street, &address.street)?;
    require(city, &address.city)?;
    require(state, &address.state)?;
    require(zip, &address.zip)
}

#[track_caller]
fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
fn validate_wait(wait_minutes: f64) -> Result<(), ValidationError> {
    if !wait_minutes.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "wait",
            message: String::from("Wait time must be a number of minutes."),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
