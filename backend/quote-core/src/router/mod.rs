mod response;

use crate::endpoint::{log_service_failure, parse_base_url};
use crate::error::route::RouteError;

use response::{DirectionsRequest, DirectionsResponse};

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};
use models::GeoPoint;

use std::panic::Location;

use const_format::concatcp;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

const ROUTING_SERVICE_NAME: &str = "Routing";
const DRIVING_PROFILE: &str = "driving-car";
const DIRECTIONS_PATH: &str = concatcp!("v2/directions/", DRIVING_PROFILE);
const API_KEY_PARAM: &str = "api_key";

/// Client for the driving directions service.
#[derive(Clone)]
pub struct Router {
    directions_url: Url,
    client: Client,
}

impl Router {
    pub fn new(base_url: &str, client: Client) -> Result<Self, RouteError> {
        let directions_url = parse_base_url(base_url)?.join(DIRECTIONS_PATH)?;
        Ok(Self {
            directions_url,
            client,
        })
    }

    /// Driving distance in meters from `from` to `to`.
    ///
    /// One request per call; the first (best-ranked) route is used.
    ///
    /// # Errors
    ///
    /// * [`RouteError::Service`] - non-success HTTP status, with the response body
    /// * [`RouteError::NoRoute`] - the service returned no routes
    /// * [`RouteError::Http`] / [`RouteError::Json`] - transport or decoding failure
    pub async fn route_distance(
        &self,
        from: &GeoPoint,
        to: &GeoPoint,
        api_key: &RedactedApiKey,
    ) -> Result<f64, RouteError> {
        debug!("Routing '{}' -> '{}'", from.label, to.label);

        let mut url = self.directions_url.clone();
        url.query_pairs_mut().append_pair(API_KEY_PARAM, api_key.expose());

        let body = DirectionsRequest {
            coordinates: [from.lon_lat(), to.lon_lat()],
        };

        let response = self.client.post(url).json(&body).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Routing '{}' -> '{}' failed", from.label, to.label);
            log_service_failure(ROUTING_SERVICE_NAME, status);
            return Err(RouteError::Service {
                status,
                body: text,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let text = response.text().await?;
        let parsed: DirectionsResponse = serde_json::from_str(&text)?;

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RouteError::NoRoute {
                message: format!("No driving route from '{}' to '{}'", from.label, to.label),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(
            "Route '{}' -> '{}' is {} m",
            from.label, to.label, route.summary.distance
        );

        Ok(route.summary.distance)
    }
}
