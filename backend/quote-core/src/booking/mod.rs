//! Booking submission to the externally configured receiver.

use crate::error::booking::BookingError;

use common::{ErrorLocation, HttpStatusCode};
use models::BookingPayload;

use std::panic::Location;
use std::sync::OnceLock;

use log::{debug, error, info};
use regex::Regex;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use url::Url;

// The receiver parses the raw body as JSON text.
const PAYLOAD_CONTENT_TYPE: &str = "text/plain;charset=utf-8";
const ENDPOINT_PATTERN: &str = r"^https?://";

static ENDPOINT_REGEX: OnceLock<Regex> = OnceLock::new();

fn endpoint_regex() -> &'static Regex {
    ENDPOINT_REGEX.get_or_init(|| Regex::new(ENDPOINT_PATTERN).expect("valid regex pattern"))
}

/// Whether `endpoint` looks like an http(s) URL worth attempting.
pub fn is_configured_endpoint(endpoint: &str) -> bool {
    endpoint_regex().is_match(endpoint.trim())
}

/// What the receiver answered for an accepted booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub receipt: Value,
    pub submitted_at: String,
    pub total_amount: f64,
}

/// Posts booking payloads to one endpoint.
#[derive(Clone)]
pub struct BookingSubmitter {
    endpoint: Url,
    client: Client,
}

impl BookingSubmitter {
    /// Refuses locally, before any network call, when `endpoint` is not an
    /// http(s) URL.
    #[track_caller]
    pub fn new(endpoint: &str, client: Client) -> Result<Self, BookingError> {
        if !is_configured_endpoint(endpoint) {
            error!("Booking endpoint is not configured: '{endpoint}'");
            return Err(BookingError::Endpoint {
                message: format!("Booking endpoint is not configured: '{endpoint}'"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let endpoint = Url::parse(endpoint.trim()).map_err(|e| BookingError::Endpoint {
            message: format!("Booking endpoint is not a valid URL: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { endpoint, client })
    }

    /// POST the payload as JSON text.
    ///
    /// # Errors
    ///
    /// * [`BookingError::Endpoint`] - the receiver could not be reached
    /// * [`BookingError::Rejected`] - non-success status, with the response body
    /// * [`BookingError::Json`] - success status but the body is not JSON
    pub async fn submit(&self, payload: &BookingPayload) -> Result<BookingConfirmation, BookingError> {
        let body = serde_json::to_string(payload)?;

        debug!("Submitting booking to {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, PAYLOAD_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Booking receiver returned HTTP {status}: {text}");
            return Err(BookingError::Rejected {
                status,
                body: text,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let text = response.text().await?;
        let receipt: Value = serde_json::from_str(&text)?;

        info!(
            "Booking accepted for {} ({} on {} at {})",
            payload.name, payload.service, payload.date, payload.time
        );

        Ok(BookingConfirmation {
            receipt,
            submitted_at: payload.submitted_at.clone(),
            total_amount: payload.quote.total,
        })
    }
}
