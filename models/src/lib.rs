//! Domain models for the courier quote engine.
//!
//! This crate contains pure data structures: addresses, geocoded points,
//! tariffs, trip and quote results, and the booking payload sent to the
//! submission endpoint. Models carry no I/O; the pipeline that produces
//! them lives in `quote-core`.
//!
//! All types serialize in camelCase, the shape used by the override store
//! and by the booking receiver.

pub mod address;
pub mod booking;
pub mod error;
pub mod geo;
pub mod quote;
pub mod tariff;
pub mod trip;

#[cfg(test)]
mod tests;

pub use address::Address;
pub use booking::builder::BookingPayloadBuilder;
pub use booking::{BookingPayload, BookingRequest, BusinessProfile, Customer, LegsMeters, QuoteSnapshot};
pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use geo::GeoPoint;
pub use quote::{Quote, QuoteBreakdown, QuoteRequest};
pub use tariff::Tariff;
pub use trip::{TripLegs, TripPoints, TripResult};
