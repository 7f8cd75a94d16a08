use serde::{Deserialize, Serialize};

/// A geocoded point with the label the geocoding service matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            label: label.into(),
        }
    }

    /// `[lon, lat]`, the coordinate order the routing service expects.
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}
