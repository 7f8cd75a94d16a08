use serde::{Deserialize, Serialize};

/// Linear pricing parameters, in USD and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub base: f64,
    pub per_mile: f64,
    pub wait_per_min: f64,
    pub free_wait_mins: f64,
}

impl Tariff {
    pub fn new(base: f64, per_mile: f64, wait_per_min: f64, free_wait_mins: f64) -> Self {
        Self {
            base,
            per_mile,
            wait_per_min,
            free_wait_mins,
        }
    }

    /// Name of the first field that is negative or not finite, if any.
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        [
            ("base", self.base),
            ("perMile", self.per_mile),
            ("waitPerMin", self.wait_per_min),
            ("freeWaitMins", self.free_wait_mins),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(name, _)| name)
    }
}
