//! Top-level entry points: price a trip, and book it.

use crate::booking::{BookingConfirmation, BookingSubmitter};
use crate::config::Configuration;
use crate::endpoint::build_http_client;
use crate::error::CoreError;
use crate::error::booking::BookingError;
use crate::pricing::{QuoteSummary, price};
use crate::trip::TripAggregator;
use crate::validation::{validate_booking_request, validate_quote_request};

use common::ErrorLocation;
use models::{BookingPayloadBuilder, BookingRequest, Quote, QuoteRequest, TripResult};

use std::panic::Location;
use std::time::SystemTime;

use humantime::format_rfc3339_millis;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;

/// A priced trip plus its display rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutcome {
    pub quote: Quote,
    pub trip: TripResult,
    pub summary: QuoteSummary,
}

/// Runs quote computations and bookings.
///
/// Holds only the HTTP client. Every call takes its own [`Configuration`]
/// snapshot, so back-to-back calls are fully independent.
#[derive(Clone)]
pub struct QuoteEngine {
    client: Client,
}

impl QuoteEngine {
    pub fn new() -> Result<Self, CoreError> {
        let client = build_http_client().map_err(|e| CoreError::Client {
            message: format!("Failed to build HTTP client: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Validate the inputs, measure the round trip and price it.
    ///
    /// Errors from any stage propagate unchanged.
    pub async fn calculate_quote(
        &self,
        request: &QuoteRequest,
        config: &Configuration,
    ) -> Result<QuoteOutcome, CoreError> {
        validate_quote_request(request)?;

        let office = config.office.to_geocode_text();
        let pickup = request.pickup.to_geocode_text();
        let drop = request.drop.to_geocode_text();

        debug!("Calculating quote: office='{office}', pickup='{pickup}', drop='{drop}'");

        let trip = TripAggregator::from_config(config, self.client.clone())?
            .compute_trip(&office, &pickup, &drop, config)
            .await?;

        let quote = price(trip.total_meters, request.wait_minutes, &config.rates);
        let summary = QuoteSummary::render(&quote, &config.rates, request.wait_minutes);

        info!("Quote ready: {} for {}", summary.total, summary.distance);

        Ok(QuoteOutcome {
            quote,
            trip,
            summary,
        })
    }

    /// Validate, re-price and submit a booking.
    ///
    /// The endpoint is checked before anything else touches the network; an
    /// unconfigured endpoint fails with [`BookingError::Endpoint`] and no
    /// geocoding, routing or submission request is made.
    pub async fn book(
        &self,
        request: &BookingRequest,
        config: &Configuration,
    ) -> Result<BookingConfirmation, CoreError> {
        validate_booking_request(request)?;

        let submitter = BookingSubmitter::new(&config.submission_endpoint, self.client.clone())?;

        let outcome = self.calculate_quote(&request.quote_request(), config).await?;

        let payload = BookingPayloadBuilder::default()
            .with_request(request.clone())
            .with_quote(outcome.quote, outcome.trip.legs, config.rates)
            .with_office(config.office.clone())
            .with_business(config.business.clone())
            .with_submitted_at(format_rfc3339_millis(SystemTime::now()).to_string())
            .build()
            .map_err(BookingError::from)?;

        Ok(submitter.submit(&payload).await?)
    }
}
