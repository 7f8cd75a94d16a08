use super::format_money;

use models::{Quote, Tariff};

use std::fmt;

use serde::Serialize;

const BREAKDOWN_SEPARATOR: &str = " · ";

/// Display strings for a priced trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    /// e.g. `$47.50`
    pub total: String,
    /// e.g. `10.0 mi`
    pub distance: String,
    /// Base, distance and wait lines, in that order.
    pub breakdown: Vec<String>,
}

impl QuoteSummary {
    pub fn render(quote: &Quote, tariff: &Tariff, wait_minutes: f64) -> Self {
        let miles = format!("{:.1} mi", quote.miles);

        let breakdown = vec![
            format!("Base: {}", format_money(quote.breakdown.base_amount)),
            format!(
                "Distance: {miles} × {}/mi = {}",
                format_money(tariff.per_mile),
                format_money(quote.breakdown.distance_amount)
            ),
            format!(
                "Wait: {wait_minutes} min (first {} free) = {}",
                tariff.free_wait_mins,
                format_money(quote.breakdown.wait_amount)
            ),
        ];

        Self {
            total: format_money(quote.total_amount),
            distance: miles,
            breakdown,
        }
    }
}

impl fmt::Display for QuoteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.breakdown.join(BREAKDOWN_SEPARATOR))
    }
}
