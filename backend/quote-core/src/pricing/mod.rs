//! Linear tariff: base fee + per-mile distance + per-minute billable wait.

mod summary;

pub use summary::QuoteSummary;

use models::{Quote, QuoteBreakdown, Tariff};

pub const METERS_PER_MILE: f64 = 1609.344;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Minutes of wait beyond the free allowance. Never negative.
pub fn billable_wait_minutes(wait_minutes: f64, free_wait_mins: f64) -> f64 {
    (wait_minutes - free_wait_mins).max(0.0)
}

/// Price a trip. Amounts keep full precision; see [`round_cents`] for display.
///
/// Negative wait input is clamped to zero billable minutes, not rejected.
pub fn price(total_meters: f64, wait_minutes: f64, tariff: &Tariff) -> Quote {
    let miles = meters_to_miles(total_meters);
    let billable_wait = billable_wait_minutes(wait_minutes, tariff.free_wait_mins);

    let base_amount = tariff.base;
    let distance_amount = miles * tariff.per_mile;
    let wait_amount = billable_wait * tariff.wait_per_min;

    Quote {
        total_amount: base_amount + distance_amount + wait_amount,
        miles,
        billable_wait_minutes: billable_wait,
        breakdown: QuoteBreakdown {
            base_amount,
            distance_amount,
            wait_amount,
        },
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// USD with two decimals, e.g. `$47.50`.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", round_cents(amount))
}
