//! RealTime Trains API response DTOs.
//!
//! These types map directly to the RTT JSON API responses. They use
//! `Option` liberally because RTT omits fields rather than sending null
//! values in many cases. Fields the formatter does not read are kept in
//! a flattened map so the JSON endpoints re-emit payloads unchanged.

use serde::{Deserialize, Serialize};

/// Response from `search/{station}` or `search/{station}/to/{station}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Services departing within the search window. Omitted entirely
    /// when there are none.
    pub services: Option<Vec<DepartureRecord>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One scheduled train or replacement-bus service at a station.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureRecord {
    /// `"train"` or `"bus"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    /// Timing and routing details at the searched location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_detail: Option<LocationDetail>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Location-specific details for a departure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    /// Timetabled departure time, `HHmm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbtt_booked_departure: Option<String>,

    /// Predicted or observed departure time, `HHmm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_departure: Option<String>,

    /// Name of the origin station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Calling points; the first entry's description is the display
    /// destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<Destination>>,

    /// Departure platform, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Present only when the service is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason_code: Option<String>,

    /// Human-readable cancellation reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason_long_text: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A destination entry within a departure's routing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Station name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DepartureRecord {
    /// Whether this service has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.location_detail
            .as_ref()
            .and_then(|l| l.cancel_reason_code.as_deref())
            .is_some_and(|code| !code.is_empty())
    }

    /// Whether this is a replacement bus service.
    pub fn is_bus(&self) -> bool {
        self.service_type.as_deref() == Some("bus")
    }

    /// Booked departure time string (`HHmm`), if present.
    pub fn booked_departure(&self) -> Option<&str> {
        self.location_detail
            .as_ref()
            .and_then(|l| l.gbtt_booked_departure.as_deref())
    }

    /// Realtime departure time string (`HHmm`), if present.
    pub fn realtime_departure(&self) -> Option<&str> {
        self.location_detail
            .as_ref()
            .and_then(|l| l.realtime_departure.as_deref())
    }

    /// Origin station name, if present.
    pub fn origin_name(&self) -> Option<&str> {
        self.location_detail
            .as_ref()
            .and_then(|l| l.description.as_deref())
    }

    /// Display destination: the first destination entry's description.
    pub fn destination_name(&self) -> Option<&str> {
        self.location_detail
            .as_ref()
            .and_then(|l| l.destination.as_ref())
            .and_then(|d| d.first())
            .and_then(|d| d.description.as_deref())
    }

    /// Departure platform, if known.
    pub fn platform(&self) -> Option<&str> {
        self.location_detail
            .as_ref()
            .and_then(|l| l.platform.as_deref())
    }

    /// Cancellation reason text, if present.
    pub fn cancel_reason(&self) -> Option<&str> {
        self.location_detail
            .as_ref()
            .and_then(|l| l.cancel_reason_long_text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> DepartureRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn deserialize_minimal_service() {
        let rec = record(serde_json::json!({
            "serviceType": "train",
            "locationDetail": {
                "gbttBookedDeparture": "1000",
                "realtimeDeparture": "1005",
                "description": "Reading",
                "destination": [{"description": "London Paddington"}],
                "platform": "4"
            }
        }));

        assert!(!rec.is_cancelled());
        assert!(!rec.is_bus());
        assert_eq!(rec.booked_departure(), Some("1000"));
        assert_eq!(rec.realtime_departure(), Some("1005"));
        assert_eq!(rec.origin_name(), Some("Reading"));
        assert_eq!(rec.destination_name(), Some("London Paddington"));
        assert_eq!(rec.platform(), Some("4"));
    }

    #[test]
    fn cancelled_requires_nonempty_code() {
        let rec = record(serde_json::json!({
            "locationDetail": {"cancelReasonCode": ""}
        }));
        assert!(!rec.is_cancelled());

        let rec = record(serde_json::json!({
            "locationDetail": {
                "cancelReasonCode": "TG",
                "cancelReasonLongText": "a points failure"
            }
        }));
        assert!(rec.is_cancelled());
        assert_eq!(rec.cancel_reason(), Some("a points failure"));
    }

    #[test]
    fn missing_fields_are_none() {
        let rec = record(serde_json::json!({}));
        assert!(!rec.is_cancelled());
        assert!(!rec.is_bus());
        assert_eq!(rec.booked_departure(), None);
        assert_eq!(rec.destination_name(), None);
        assert_eq!(rec.platform(), None);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let input = serde_json::json!({
            "serviceUid": "W12345",
            "runDate": "2024-03-07",
            "serviceType": "train",
            "locationDetail": {
                "realtimeActivated": true,
                "gbttBookedDeparture": "1000"
            }
        });
        let rec = record(input.clone());
        let output = serde_json::to_value(&rec).unwrap();
        assert_eq!(output["serviceUid"], "W12345");
        assert_eq!(output["runDate"], "2024-03-07");
        assert_eq!(output["locationDetail"]["realtimeActivated"], true);
    }

    #[test]
    fn search_response_without_services() {
        let resp: SearchResponse = serde_json::from_str(r#"{"location": {}}"#).unwrap();
        assert!(resp.services.is_none());
    }
}
