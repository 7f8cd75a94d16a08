use crate::Address;

use serde::{Deserialize, Serialize};

/// Form inputs needed to price a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub pickup: Address,
    pub drop: Address,
    #[serde(default)]
    pub wait_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub base_amount: f64,
    pub distance_amount: f64,
    pub wait_amount: f64,
}

/// Itemized price. Amounts are unrounded; round only when displaying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub total_amount: f64,
    pub miles: f64,
    pub billable_wait_minutes: f64,
    pub breakdown: QuoteBreakdown,
}
