use crate::GeoPoint;

use serde::{Deserialize, Serialize};

/// Driving distances, in meters, of the three legs of a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLegs {
    pub office_to_pickup: f64,
    pub pickup_to_drop: f64,
    pub drop_to_office: f64,
}

impl TripLegs {
    pub fn total_meters(&self) -> f64 {
        self.office_to_pickup + self.pickup_to_drop + self.drop_to_office
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPoints {
    pub office: GeoPoint,
    pub pickup: GeoPoint,
    pub drop: GeoPoint,
}

/// Office → pickup → drop-off → office, fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    pub total_meters: f64,
    pub legs: TripLegs,
    pub points: TripPoints,
}

impl TripResult {
    pub fn new(legs: TripLegs, points: TripPoints) -> Self {
        Self {
            total_meters: legs.total_meters(),
            legs,
            points,
        }
    }
}
