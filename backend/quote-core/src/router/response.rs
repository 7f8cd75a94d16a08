use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct DirectionsRequest {
    /// `[[lon, lat], [lon, lat]]`
    pub coordinates: [[f64; 2]; 2],
}

/// The subset of the directions response we read.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Route {
    #[serde(default)]
    pub summary: Summary,
}

/// The service omits `distance` for zero-length routes.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Summary {
    #[serde(default)]
    pub distance: f64,
}
