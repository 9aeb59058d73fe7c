//! HTTP route handlers.
//!
//! Every endpoint answers with status 200; upstream failures appear as
//! an `{"error": ...}` body (JSON endpoints) or as rendered text (the
//! xbar endpoint).

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::rtt::RttError;
use crate::xbar::xbar_output;

use super::dto::{DeparturesResponse, ErrorResponse, HealthResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health))
        .route("/api/v1/departures/from/:fromStation", get(departures_from))
        .route(
            "/api/v1/departures/from/:fromStation/to/:toStation",
            get(departures_from_to),
        )
        .route(
            "/api/v1/service/:serviceId/runDate/:runDate",
            get(service_info),
        )
        // axum has no optional trailing segment, so the xbar endpoint is
        // registered with and without return_after.
        .route(
            "/api/v1/xbar/from/:fromStation/to/:toStation/max_departures/:maxDepartures",
            get(xbar_without_return),
        )
        .route(
            "/api/v1/xbar/from/:fromStation/to/:toStation/max_departures/:maxDepartures/return_after/:returnAfter",
            get(xbar_with_return),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Departures from a station.
async fn departures_from(
    State(state): State<AppState>,
    Path(from_station): Path<String>,
) -> Response {
    departures_response(state.rtt.search_departures(&from_station, None).await)
}

/// Departures from a station calling at another.
async fn departures_from_to(
    State(state): State<AppState>,
    Path((from_station, to_station)): Path<(String, String)>,
) -> Response {
    departures_response(
        state
            .rtt
            .search_departures(&from_station, Some(&to_station))
            .await,
    )
}

/// Service details, passed through from RTT unchanged.
async fn service_info(
    State(state): State<AppState>,
    Path((service_id, run_date)): Path<(String, String)>,
) -> Response {
    match state.rtt.service_info(&service_id, &run_date).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => error_response(e),
    }
}

/// Xbar text output without a return_after time.
async fn xbar_without_return(
    State(state): State<AppState>,
    Path((from_station, to_station, max_departures)): Path<(String, String, usize)>,
) -> String {
    xbar_output(&state.rtt, &from_station, &to_station, max_departures, None).await
}

/// Xbar text output with a return_after time for the direction swap.
async fn xbar_with_return(
    State(state): State<AppState>,
    Path((from_station, to_station, max_departures, return_after)): Path<(
        String,
        String,
        usize,
        String,
    )>,
) -> String {
    xbar_output(
        &state.rtt,
        &from_station,
        &to_station,
        max_departures,
        Some(&return_after),
    )
    .await
}

fn departures_response(
    result: Result<Vec<crate::rtt::DepartureRecord>, RttError>,
) -> Response {
    match result {
        Ok(departures) => Json(DeparturesResponse { departures }).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: RttError) -> Response {
    Json(ErrorResponse {
        error: e.to_string(),
    })
    .into_response()
}
