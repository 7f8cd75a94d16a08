//! Booking form inputs and the payload posted to the booking endpoint.

pub mod builder;

use crate::{Address, QuoteRequest, Tariff, TripLegs};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Mobile carrier for SMS confirmations; empty when not given.
    #[serde(default)]
    pub carrier: String,
}

/// Business contact details echoed into every booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Everything the customer fills in on the booking form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub version: String,
    pub service: String,
    #[serde(default)]
    pub other_details: String,
    pub customer: Customer,
    pub pickup: Address,
    pub drop: Address,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub wait_minutes: f64,
    #[serde(default)]
    pub notes: String,
}

impl BookingRequest {
    /// The subset of the form that drives pricing.
    pub fn quote_request(&self) -> QuoteRequest {
        QuoteRequest {
            pickup: self.pickup.clone(),
            drop: self.drop.clone(),
            wait_minutes: self.wait_minutes,
        }
    }
}

/// Per-leg meters under the short keys the booking receiver reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegsMeters {
    pub op: f64,
    pub pd: f64,
    pub dof: f64,
}

impl From<&TripLegs> for LegsMeters {
    fn from(legs: &TripLegs) -> Self {
        Self {
            op: legs.office_to_pickup,
            pd: legs.pickup_to_drop,
            dof: legs.drop_to_office,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    pub total: f64,
    /// Rounded to two decimals.
    pub miles: f64,
    pub legs_meters: LegsMeters,
    pub rates: Tariff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub version: String,
    pub service: String,
    pub other_details: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub carrier: String,
    pub pickup: Address,
    pub drop: Address,
    pub date: String,
    pub time: String,
    pub wait_mins: f64,
    pub notes: String,
    pub quote: QuoteSnapshot,
    pub office: Address,
    pub business: BusinessProfile,
    /// RFC 3339 timestamp.
    pub submitted_at: String,
}
