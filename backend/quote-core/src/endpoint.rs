use common::HttpStatusCode;

use std::time::Duration;

use log::{error, warn};
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Parse a configured service base URL so that relative paths join beneath it.
///
/// `Url::join` replaces the last path segment unless the base ends with `/`,
/// so one is appended when missing.
pub(crate) fn parse_base_url(base: &str) -> Result<Url, url::ParseError> {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{trimmed}/"))
    }
}

pub(crate) fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(DEFAULT_TIMEOUT_DURATION).build()
}

/// Log a non-success answer from a map service, separating our mistakes
/// (bad key, bad query) from outages on their side.
pub(crate) fn log_service_failure(service: &str, status: HttpStatusCode) {
    if status.is_client_error() {
        error!("{service} service rejected the request with HTTP {status}; check the API key in Admin");
    } else if status.is_server_error() {
        warn!("{service} service unavailable (HTTP {status})");
    } else {
        warn!("{service} service answered HTTP {status}");
    }
}
