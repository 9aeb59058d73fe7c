//! Departure delay arithmetic and icon mapping.
//!
//! RTT provides departure times as 4-digit `HHmm` strings. Delay is the
//! realtime departure minus the booked departure in minutes, computed on
//! the same calendar day (no midnight-rollover handling, matching the
//! upstream board semantics).

use crate::rtt::DepartureRecord;

/// Parse a 4-digit `HHmm` string into minutes since midnight.
///
/// Returns `None` for anything that is not exactly four digits forming
/// a valid time of day.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let hour = (bytes[0] - b'0') as u32 * 10 + (bytes[1] - b'0') as u32;
    let minute = (bytes[2] - b'0') as u32 * 10 + (bytes[3] - b'0') as u32;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some(hour * 60 + minute)
}

/// Format an optional `HHmm` string as `HH:mm`, or `"Unknown"` when the
/// value is absent or malformed.
pub fn format_hhmm(raw: Option<&str>) -> String {
    match raw.and_then(parse_hhmm) {
        Some(mins) => format!("{:02}:{:02}", mins / 60, mins % 60),
        None => "Unknown".to_string(),
    }
}

/// Delay in minutes for a departure: realtime minus booked.
///
/// `None` when either time is missing or unparseable.
pub fn departure_delay(departure: &DepartureRecord) -> Option<i32> {
    let booked = departure.booked_departure().and_then(parse_hhmm)?;
    let realtime = departure.realtime_departure().and_then(parse_hhmm)?;
    Some(realtime as i32 - booked as i32)
}

/// Summary icon for a delay.
///
/// On time is a green circle, 1-9 minutes late is the matching keycap
/// digit, and everything else (10+ minutes, early, or not computable)
/// is a red circle.
pub fn delay_icon(delay: Option<i32>) -> &'static str {
    match delay {
        Some(0) => "\u{1F7E2}",
        Some(1) => "1\u{FE0F}\u{20E3}",
        Some(2) => "2\u{FE0F}\u{20E3}",
        Some(3) => "3\u{FE0F}\u{20E3}",
        Some(4) => "4\u{FE0F}\u{20E3}",
        Some(5) => "5\u{FE0F}\u{20E3}",
        Some(6) => "6\u{FE0F}\u{20E3}",
        Some(7) => "7\u{FE0F}\u{20E3}",
        Some(8) => "8\u{FE0F}\u{20E3}",
        Some(9) => "9\u{FE0F}\u{20E3}",
        _ => "\u{1F534}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtt::LocationDetail;

    fn departure(booked: Option<&str>, realtime: Option<&str>) -> DepartureRecord {
        DepartureRecord {
            service_type: Some("train".to_string()),
            location_detail: Some(LocationDetail {
                gbtt_booked_departure: booked.map(String::from),
                realtime_departure: realtime.map(String::from),
                ..Default::default()
            }),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(parse_hhmm("0000"), Some(0));
        assert_eq!(parse_hhmm("1005"), Some(605));
        assert_eq!(parse_hhmm("2359"), Some(23 * 60 + 59));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("100"), None);
        assert_eq!(parse_hhmm("10:00"), None);
        assert_eq!(parse_hhmm("2400"), None);
        assert_eq!(parse_hhmm("1060"), None);
        assert_eq!(parse_hhmm("abcd"), None);
    }

    #[test]
    fn format_degrades_to_unknown() {
        assert_eq!(format_hhmm(Some("1000")), "10:00");
        assert_eq!(format_hhmm(Some("bad")), "Unknown");
        assert_eq!(format_hhmm(None), "Unknown");
    }

    #[test]
    fn delay_is_realtime_minus_booked() {
        assert_eq!(departure_delay(&departure(Some("1000"), Some("1005"))), Some(5));
        assert_eq!(departure_delay(&departure(Some("1000"), Some("1000"))), Some(0));
        assert_eq!(departure_delay(&departure(Some("1000"), Some("0957"))), Some(-3));
    }

    #[test]
    fn delay_needs_both_times() {
        assert_eq!(departure_delay(&departure(None, Some("1005"))), None);
        assert_eq!(departure_delay(&departure(Some("1000"), None)), None);
        assert_eq!(departure_delay(&departure(Some("junk"), Some("1005"))), None);
    }

    #[test]
    fn icon_mapping() {
        assert_eq!(delay_icon(Some(0)), "🟢");
        assert_eq!(delay_icon(Some(5)), "5️⃣");
        assert_eq!(delay_icon(Some(9)), "9️⃣");
        assert_eq!(delay_icon(Some(12)), "🔴");
        assert_eq!(delay_icon(Some(-3)), "🔴");
    }

    #[test]
    fn unknown_delay_falls_back_to_red() {
        assert_eq!(delay_icon(None), "🔴");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_hhmm()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}{:02}", hour, minute)
        }
    }

    proptest! {
        /// Any valid HHmm string parses successfully
        #[test]
        fn valid_hhmm_parses(s in valid_hhmm()) {
            prop_assert!(parse_hhmm(&s).is_some());
        }

        /// Parsed minutes stay within a day
        #[test]
        fn parsed_minutes_in_range(s in valid_hhmm()) {
            let mins = parse_hhmm(&s).unwrap();
            prop_assert!(mins < 24 * 60);
        }

        /// Formatting a valid time inserts the colon and keeps digits
        #[test]
        fn format_roundtrip(s in valid_hhmm()) {
            let formatted = format_hhmm(Some(&s));
            prop_assert_eq!(formatted.replace(':', ""), s);
        }

        /// Non-digit input never parses
        #[test]
        fn garbage_never_parses(s in "[a-zA-Z:. ]{0,6}") {
            prop_assert_eq!(parse_hhmm(&s), None);
        }
    }
}
