use crate::error::model_error::ModelError;
use crate::{
    Address, BookingPayload, BookingRequest, BusinessProfile, ErrorLocation, LegsMeters, Quote,
    QuoteSnapshot, Tariff, TripLegs,
};

use std::panic::Location;

/// Builder for assembling a validated [`BookingPayload`].
///
/// Collects the form inputs, the priced trip and the configuration values
/// echoed into the booking, then checks that nothing required is missing.
#[derive(Debug, Default)]
pub struct BookingPayloadBuilder {
    request: Option<BookingRequest>,
    quote: Option<Quote>,
    legs: Option<TripLegs>,
    rates: Option<Tariff>,
    office: Option<Address>,
    business: Option<BusinessProfile>,
    submitted_at: Option<String>,
}

impl BookingPayloadBuilder {
    pub fn with_request(mut self, request: BookingRequest) -> Self {
        self.request = Some(request);
        self
    }

    pub fn with_quote(mut self, quote: Quote, legs: TripLegs, rates: Tariff) -> Self {
        self.quote = Some(quote);
        self.legs = Some(legs);
        self.rates = Some(rates);
        self
    }

    pub fn with_office(mut self, office: Address) -> Self {
        self.office = Some(office);
        self
    }

    pub fn with_business(mut self, business: BusinessProfile) -> Self {
        self.business = Some(business);
        self
    }

    pub fn with_submitted_at(mut self, timestamp: impl Into<String>) -> Self {
        self.submitted_at = Some(timestamp.into());
        self
    }

    /// Build the payload with validation.
    #[track_caller]
    pub fn build(self) -> Result<BookingPayload, ModelError> {
        let request = self.request.ok_or_else(|| ModelError::Validation {
            message: String::from("Booking request is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let quote = self.quote.ok_or_else(|| ModelError::Validation {
            message: String::from("Quote is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // with_quote sets all three together
        let (Some(legs), Some(rates)) = (self.legs, self.rates) else {
            return Err(ModelError::Validation {
                message: String::from("Trip legs and rates are required"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !quote.total_amount.is_finite() || quote.total_amount < 0.0 {
            return Err(ModelError::Validation {
                message: format!("Quote total must be a non-negative amount, got {}", quote.total_amount),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let office = self.office.ok_or_else(|| ModelError::Validation {
            message: String::from("Office address is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let submitted_at = self.submitted_at.ok_or_else(|| ModelError::Validation {
            message: String::from("Submission timestamp is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if submitted_at.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Submission timestamp cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let BookingRequest {
            version,
            service,
            other_details,
            customer,
            pickup,
            drop,
            date,
            time,
            wait_minutes,
            notes,
        } = request;

        Ok(BookingPayload {
            version,
            service,
            other_details,
            name: customer.name,
            phone: customer.phone,
            email: customer.email,
            carrier: customer.carrier,
            pickup,
            drop,
            date,
            time,
            wait_mins: wait_minutes,
            notes,
            quote: QuoteSnapshot {
                total: quote.total_amount,
                miles: (quote.miles * 100.0).round() / 100.0,
                legs_meters: LegsMeters::from(&legs),
                rates,
            },
            office,
            business: self.business.unwrap_or_default(),
            submitted_at,
        })
    }
}
