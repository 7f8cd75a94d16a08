use serde::Deserialize;

/// The subset of the geocoding search response we read.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    /// `[lon, lat]`
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Properties {
    #[serde(default)]
    pub label: Option<String>,
}
