pub mod api_key_error;
pub mod error_location;
