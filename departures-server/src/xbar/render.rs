//! Xbar text rendering.
//!
//! Builds the summary line and dropdown block for a station pair's
//! departures. Every dropdown line links to the departureboard.io
//! journey page for the pair.

use chrono::{Local, NaiveTime};

use crate::rtt::{DepartureRecord, RttClient, RttError};

use super::delay::{delay_icon, departure_delay, format_hhmm};

/// Fallback for any display field the upstream record omits.
const UNKNOWN: &str = "Unknown";

/// An ordered from/to pair of station codes, fixed for the whole
/// rendering pass after the direction swap has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPair {
    pub from: String,
    pub to: String,
}

impl StationPair {
    /// Journey page link for this pair.
    fn journey_url(&self) -> String {
        format!(
            "https://departureboard.io/journey/{}/{}/",
            self.from, self.to
        )
    }
}

/// Decide the travel direction for an xbar request.
///
/// If `return_after` parses as `HH:MM` and `now` is strictly after that
/// time of day, the pair is swapped (the commute home). Otherwise the
/// pair is used as given; an unparseable `return_after` never swaps.
pub fn resolve_direction(
    from: &str,
    to: &str,
    return_after: Option<&str>,
    now: NaiveTime,
) -> StationPair {
    let swap = return_after
        .and_then(|s| NaiveTime::parse_from_str(s, "%H:%M").ok())
        .is_some_and(|t| now > t);

    if swap {
        StationPair {
            from: to.to_string(),
            to: from.to_string(),
        }
    } else {
        StationPair {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Render the xbar output for a list of departures.
///
/// The summary line carries one icon per departure (at most
/// `max_departures`, in upstream order); the dropdown carries one
/// detail line each.
pub fn render_departures(
    pair: &StationPair,
    departures: &[DepartureRecord],
    max_departures: usize,
) -> String {
    let mut summary = format!("{} → {}: ", pair.from, pair.to);
    let mut dropdown = String::new();

    if departures.is_empty() {
        summary.push('❌');
        dropdown.push_str(&format!(
            "No upcoming trains found for today | href={}",
            pair.journey_url()
        ));
    } else {
        for departure in departures.iter().take(max_departures) {
            if departure.is_cancelled() {
                summary.push('❌');
                dropdown.push_str(&cancellation_line(pair, departure));
            } else if departure.is_bus() {
                summary.push('🚌');
                dropdown.push_str(&bus_line(pair, departure));
            } else {
                let delay = departure_delay(departure);
                summary.push_str(delay_icon(delay));
                dropdown.push_str(&train_line(pair, departure, delay));
            }
        }
    }

    summary + "\n --- \n" + &dropdown
}

/// Render the xbar output when the departure fetch itself failed.
///
/// The error is surfaced in the dropdown rather than being passed off
/// as an empty board.
pub fn render_fetch_error(pair: &StationPair, error: &RttError) -> String {
    format!(
        "{} → {}: ⚠️\n --- \nFailed to fetch departures: {} | href={}",
        pair.from,
        pair.to,
        error,
        pair.journey_url()
    )
}

/// Dropdown line for a normal train departure.
fn train_line(pair: &StationPair, departure: &DepartureRecord, delay: Option<i32>) -> String {
    let booked = format_hhmm(departure.booked_departure());
    let realtime = format_hhmm(departure.realtime_departure());
    let origin = departure.origin_name().unwrap_or(UNKNOWN);
    let destination = departure.destination_name().unwrap_or(UNKNOWN);
    let platform = departure.platform().unwrap_or(UNKNOWN);

    let delay_text = match delay {
        Some(d) if d > 0 => format!(", delay: +{d}"),
        _ => String::new(),
    };

    format!(
        "{booked} (actual: {realtime}{delay_text}) {origin} to {destination} - Platform {platform} | href={} \n",
        pair.journey_url()
    )
}

/// Dropdown line for a replacement bus service.
fn bus_line(pair: &StationPair, departure: &DepartureRecord) -> String {
    let booked = format_hhmm(departure.booked_departure());
    let origin = departure.origin_name().unwrap_or(UNKNOWN);
    let destination = departure.destination_name().unwrap_or(UNKNOWN);

    format!(
        "{booked} - Replacement bus service from {origin} to {destination} | href={} \n",
        pair.journey_url()
    )
}

/// Dropdown line for a cancelled departure.
fn cancellation_line(pair: &StationPair, departure: &DepartureRecord) -> String {
    let booked = format_hhmm(departure.booked_departure());
    let origin = departure.origin_name().unwrap_or(UNKNOWN);
    let destination = departure.destination_name().unwrap_or(UNKNOWN);
    let reason = departure.cancel_reason().unwrap_or(UNKNOWN);

    format!(
        "CANCELLED: {booked} {origin} to {destination} - {reason} | href={} \n",
        pair.journey_url()
    )
}

/// Produce the full xbar text for a station pair.
///
/// Applies the direction swap against the current wall clock, fetches
/// departures, and renders either the board or the fetch error.
pub async fn xbar_output(
    client: &RttClient,
    from: &str,
    to: &str,
    max_departures: usize,
    return_after: Option<&str>,
) -> String {
    let pair = resolve_direction(from, to, return_after, Local::now().time());

    match client.search_departures(&pair.from, Some(&pair.to)).await {
        Ok(departures) => render_departures(&pair, &departures, max_departures),
        Err(e) => render_fetch_error(&pair, &e),
    }
}
