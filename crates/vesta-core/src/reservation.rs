//! # Reservations
//!
//! Table reservation aggregate. Much simpler than orders - no pricing, no
//! item tree - but it shares the tag fields, contact, and the
//! server-assigned id / status / owner-token lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Contact;

/// Reservation lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    New,
    Accepted,
    Canceled,

    #[serde(other)]
    Unknown,
}

/// A table reservation request/record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Server-assigned on submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub restaurant_id: String,

    #[serde(default)]
    pub locale: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// Seats requested, >= 1.
    #[serde(default)]
    pub party_size: u32,

    /// Reserved time (epoch millis on the wire).
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<DateTime<Utc>>,

    /// How long the table is held past the reserved time.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub held_until: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Server-assigned anonymous-owner credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_fields_round_trip_as_millis() {
        let reservation = Reservation {
            restaurant_id: "r-1".to_string(),
            party_size: 2,
            time: Some(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()),
            status: Some(ReservationStatus::New),
            ..Default::default()
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["time"], 1_700_000_000_000i64);
        assert_eq!(json["status"], "new");

        let back: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(back, reservation);
    }
}
