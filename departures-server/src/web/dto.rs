//! Response envelopes for the JSON endpoints.

use serde::Serialize;

use crate::rtt::DepartureRecord;

/// Body of `/healthcheck`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Successful departures response.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub departures: Vec<DepartureRecord>,
}

/// Error envelope.
///
/// Upstream failures are reported in the body with HTTP 200; the facade
/// never maps them onto HTTP error statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
