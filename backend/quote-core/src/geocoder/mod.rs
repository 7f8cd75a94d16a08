mod response;

use crate::endpoint::{log_service_failure, parse_base_url};
use crate::error::geocode::GeocodeError;

use response::GeocodeResponse;

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};
use models::GeoPoint;

use std::panic::Location;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

const GEOCODING_SERVICE_NAME: &str = "Geocoding";
const GEOCODE_SEARCH_PATH: &str = "geocode/search";
const API_KEY_PARAM: &str = "api_key";
const TEXT_PARAM: &str = "text";
const BOUNDARY_COUNTRY_PARAM: &str = "boundary.country";
const BOUNDARY_COUNTRY: &str = "US";
const SIZE_PARAM: &str = "size";
// Only the top-ranked candidate is ever used.
const RESULT_LIMIT: &str = "1";

/// Client for the geocoding search service.
#[derive(Clone)]
pub struct Geocoder {
    search_url: Url,
    client: Client,
}

impl Geocoder {
    pub fn new(base_url: &str, client: Client) -> Result<Self, GeocodeError> {
        let search_url = parse_base_url(base_url)?.join(GEOCODE_SEARCH_PATH)?;
        Ok(Self { search_url, client })
    }

    /// Resolve a free-text US address to its best-matching point.
    ///
    /// # Errors
    ///
    /// * [`GeocodeError::AddressNotFound`] - the service matched nothing
    /// * [`GeocodeError::Service`] - non-success HTTP status
    /// * [`GeocodeError::Http`] / [`GeocodeError::Json`] - transport or decoding failure
    pub async fn geocode(
        &self,
        address: &str,
        api_key: &RedactedApiKey,
    ) -> Result<GeoPoint, GeocodeError> {
        debug!("Geocoding '{address}'");

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, api_key.expose())
            .append_pair(TEXT_PARAM, address)
            .append_pair(BOUNDARY_COUNTRY_PARAM, BOUNDARY_COUNTRY)
            .append_pair(SIZE_PARAM, RESULT_LIMIT);

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log_service_failure(GEOCODING_SERVICE_NAME, status);
            return Err(GeocodeError::Service {
                status,
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse = serde_json::from_str(&body)?;

        let Some(feature) = parsed.features.into_iter().next() else {
            warn!("No geocoding match for '{address}'");
            return Err(GeocodeError::AddressNotFound {
                address: address.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let [lon, lat, ..] = feature.geometry.coordinates[..] else {
            return Err(GeocodeError::Json {
                message: format!(
                    "Expected [lon, lat] coordinates, got {} values",
                    feature.geometry.coordinates.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let label = feature
            .properties
            .label
            .unwrap_or_else(|| address.to_string());

        debug!("Geocoded '{address}' to ({lat}, {lon}) '{label}'");

        Ok(GeoPoint::new(lat, lon, label))
    }
}
