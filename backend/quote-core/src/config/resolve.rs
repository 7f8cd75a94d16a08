use super::{Configuration, ConfigOverride, ServiceEndpoints};

use common::ObfuscatedApiKey;
use models::{Address, BusinessProfile, Tariff};

use log::warn;

/// Merge an override layer onto a base configuration.
///
/// Scalars take the override when it is present and non-blank; nested
/// sections merge field by field with the same rule. Rate overrides that are
/// negative or not finite are skipped so the result always satisfies the
/// tariff invariant. Pure and total.
pub fn resolve(base: &Configuration, overrides: &ConfigOverride) -> Configuration {
    let office = match &overrides.office {
        Some(o) => Address {
            street: pick_text(&o.street, &base.office.street),
            city: pick_text(&o.city, &base.office.city),
            state: pick_text(&o.state, &base.office.state),
            zip: pick_text(&o.zip, &base.office.zip),
        },
        None => base.office.clone(),
    };

    let rates = match &overrides.rates {
        Some(r) => Tariff {
            base: pick_rate("base", r.base, base.rates.base),
            per_mile: pick_rate("perMile", r.per_mile, base.rates.per_mile),
            wait_per_min: pick_rate("waitPerMin", r.wait_per_min, base.rates.wait_per_min),
            free_wait_mins: pick_rate("freeWaitMins", r.free_wait_mins, base.rates.free_wait_mins),
        },
        None => base.rates,
    };

    let business = match &overrides.business {
        Some(b) => BusinessProfile {
            name: pick_text(&b.name, &base.business.name),
            phone: pick_text(&b.phone, &base.business.phone),
            email: pick_text(&b.email, &base.business.email),
        },
        None => base.business.clone(),
    };

    let services = match &overrides.services {
        Some(s) => ServiceEndpoints {
            geocode_url: pick_text(&s.geocode_url, &base.services.geocode_url),
            directions_url: pick_text(&s.directions_url, &base.services.directions_url),
        },
        None => base.services.clone(),
    };

    // Specific key, then the shared legacy key, then the base value.
    let geocode_api_key = pick_key(
        &[&overrides.geocode_api_key, &overrides.ors_key],
        &base.geocode_api_key,
    );
    let routing_api_key = pick_key(
        &[&overrides.routing_api_key, &overrides.ors_key],
        &base.routing_api_key,
    );

    Configuration {
        office,
        rates,
        geocode_api_key,
        routing_api_key,
        submission_endpoint: pick_text(&overrides.submission_endpoint, &base.submission_endpoint),
        business,
        services,
    }
}

fn pick_text(candidate: &Option<String>, base: &str) -> String {
    match candidate {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => base.to_string(),
    }
}

/// First non-empty candidate in order, else `base`. Empty keys never shadow later ones.
fn pick_key(candidates: &[&Option<ObfuscatedApiKey>], base: &ObfuscatedApiKey) -> ObfuscatedApiKey {
    candidates
        .iter()
        .filter_map(|candidate| candidate.as_ref())
        .find(|key| !key.is_empty())
        .unwrap_or(base)
        .clone()
}

fn pick_rate(name: &str, candidate: Option<f64>, base: f64) -> f64 {
    match candidate {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        Some(value) => {
            warn!("Ignoring invalid '{name}' rate override {value}, keeping {base}");
            base
        }
        None => base,
    }
}
