//! Quote pipeline for a local courier service.
//!
//! Resolves the office, pickup and drop-off addresses, sums the driving
//! distance of the round trip, prices it against the configured tariff and
//! submits bookings to the configured endpoint.

pub mod booking;
pub mod config;
pub mod error;
pub mod geocoder;
pub mod pricing;
pub mod quote;
pub mod router;
pub mod trip;
pub mod validation;

mod endpoint;
#[cfg(test)]
mod tests;

pub use config::{Configuration, ServiceEndpoints};
pub use error::CoreError;
pub use quote::{QuoteEngine, QuoteOutcome};

pub const OPENROUTESERVICE_BASE_URL: &str = "https://api.openrouteservice.org";
