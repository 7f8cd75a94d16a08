//! Round-trip distance: office → pickup → drop-off → office.

use crate::config::Configuration;
use crate::error::CoreError;
use crate::error::config::ConfigError;
use crate::geocoder::Geocoder;
use crate::router::Router;

use models::{TripLegs, TripPoints, TripResult};

use log::{debug, info, warn};
use reqwest::Client;

/// Resolves the three trip points and sums the three driving legs.
#[derive(Clone)]
pub struct TripAggregator {
    geocoder: Geocoder,
    router: Router,
}

impl TripAggregator {
    pub fn new(geocoder: Geocoder, router: Router) -> Self {
        Self { geocoder, router }
    }

    /// Aggregator pointed at the services named in `config`.
    pub fn from_config(config: &Configuration, client: Client) -> Result<Self, CoreError> {
        let geocoder = Geocoder::new(&config.services.geocode_url, client.clone())?;
        let router = Router::new(&config.services.directions_url, client)?;
        Ok(Self::new(geocoder, router))
    }

    /// Geocode the three addresses, then measure the three legs.
    ///
    /// Both phases fan out concurrently and join with all-or-nothing
    /// semantics: the first failure is returned and the sibling requests of
    /// that phase are dropped. Routing starts only after all three points
    /// resolve.
    pub async fn compute_trip(
        &self,
        office: &str,
        pickup: &str,
        drop: &str,
        config: &Configuration,
    ) -> Result<TripResult, CoreError> {
        let geocode_key = config.geocode_api_key.decode().map_err(ConfigError::from)?;
        let routing_key = config.routing_api_key.decode().map_err(ConfigError::from)?;

        // Sent anyway; the service answers with an auth error the user can act on.
        if geocode_key.is_empty() || routing_key.is_empty() {
            warn!("Map service key is not set in Admin; requests will be rejected");
        }

        let (office_point, pickup_point, drop_point) = tokio::try_join!(
            self.geocoder.geocode(office, &geocode_key),
            self.geocoder.geocode(pickup, &geocode_key),
            self.geocoder.geocode(drop, &geocode_key),
        )?;

        debug!("All three trip points resolved");

        let (office_to_pickup, pickup_to_drop, drop_to_office) = tokio::try_join!(
            self.router
                .route_distance(&office_point, &pickup_point, &routing_key),
            self.router
                .route_distance(&pickup_point, &drop_point, &routing_key),
            self.router
                .route_distance(&drop_point, &office_point, &routing_key),
        )?;

        let legs = TripLegs {
            office_to_pickup,
            pickup_to_drop,
            drop_to_office,
        };

        let trip = TripResult::new(
            legs,
            TripPoints {
                office: office_point,
                pickup: pickup_point,
                drop: drop_point,
            },
        );

        info!(
            "Trip measured: {:.0} m ({:.0} + {:.0} + {:.0})",
            trip.total_meters, office_to_pickup, pickup_to_drop, drop_to_office
        );

        Ok(trip)
    }
}
