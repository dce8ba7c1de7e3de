//! Trip and connection types.
//!
//! A `Trip` is one user-facing search result; it owns at least one
//! `Connection` (a directly-operated leg). Both are produced by the trip
//! generator and never mutated after a search completes.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::delay::DelaySeverity;
use super::station::Station;
use super::train::TrainType;

/// One directly-operated leg of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Identifier, unique within the owning trip's batch
    pub id: String,

    /// Boarding station
    pub from: Arc<Station>,

    /// Alighting station
    pub to: Arc<Station>,

    /// Scheduled departure
    pub departure: NaiveDateTime,

    /// Scheduled arrival
    pub arrival: NaiveDateTime,

    /// Departure platform, if known
    pub platform: Option<String>,

    /// Train category
    pub train_type: TrainType,

    /// Train number, e.g. "4123"
    pub train_number: String,

    /// Delay in minutes, if any
    pub delay: Option<u32>,
}

/// A complete search result from origin to destination.
///
/// Invariant: `arrival == departure + duration_mins` and `connections` is
/// never empty. Both hold by construction via [`Trip::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Identifier, unique within its batch
    pub id: String,

    /// Origin station
    pub from: Arc<Station>,

    /// Destination station
    pub to: Arc<Station>,

    /// Scheduled departure
    pub departure: NaiveDateTime,

    /// Scheduled arrival
    pub arrival: NaiveDateTime,

    /// Total travel time in minutes
    pub duration_mins: u32,

    /// Number of changes (0 means a direct trip)
    pub transfers: u32,

    /// Delay in minutes, if any
    pub delay: Option<u32>,

    /// Departure platform, if known
    pub platform: Option<String>,

    /// Train category of the first leg
    pub train_type: TrainType,

    /// Train number of the first leg
    pub train_number: String,

    /// Total price in euros, if priced
    pub price: Option<f64>,

    /// Legs of the trip, in travel order; never empty
    pub connections: Vec<Connection>,
}

impl Trip {
    /// Create a trip from its departure, duration and sole initial leg.
    ///
    /// The arrival time is derived from `departure + duration_mins`, so the
    /// timing invariant cannot be violated by callers. Optional fields start
    /// out unset.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        from: Arc<Station>,
        to: Arc<Station>,
        departure: NaiveDateTime,
        duration_mins: u32,
        train_type: TrainType,
        train_number: impl Into<String>,
        connection: Connection,
    ) -> Self {
        let arrival = departure + Duration::minutes(i64::from(duration_mins));
        Self {
            id: id.into(),
            from,
            to,
            departure,
            arrival,
            duration_mins,
            transfers: 0,
            delay: None,
            platform: None,
            train_type,
            train_number: train_number.into(),
            price: None,
            connections: vec![connection],
        }
    }

    /// Total travel time as a `Duration`.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_mins))
    }

    /// Returns true if the trip has no changes.
    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }

    /// Display severity band for this trip's delay.
    pub fn delay_severity(&self) -> DelaySeverity {
        DelaySeverity::classify(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use chrono::NaiveDate;

    fn station(id: &str, name: &str) -> Arc<Station> {
        Arc::new(Station::new(StationId::parse(id).unwrap(), name))
    }

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn make_trip(duration_mins: u32) -> Trip {
        let from = station("1", "Berlin Hauptbahnhof");
        let to = station("2", "München Hauptbahnhof");
        let connection = Connection {
            id: "conn-0-0".to_string(),
            from: from.clone(),
            to: to.clone(),
            departure: dt(8, 30),
            arrival: dt(8, 30) + Duration::minutes(i64::from(duration_mins)),
            platform: Some("4".to_string()),
            train_type: TrainType::Ice,
            train_number: "1042".to_string(),
            delay: None,
        };
        Trip::new(
            "trip-0",
            from,
            to,
            dt(8, 30),
            duration_mins,
            TrainType::Ice,
            "1042",
            connection,
        )
    }

    #[test]
    fn arrival_derived_from_duration() {
        let trip = make_trip(150);
        assert_eq!(trip.arrival, dt(11, 0));
        assert_eq!(trip.arrival - trip.departure, trip.duration());
    }

    #[test]
    fn new_trip_has_one_connection() {
        let trip = make_trip(120);
        assert_eq!(trip.connections.len(), 1);
    }

    #[test]
    fn direct_trip() {
        let mut trip = make_trip(120);
        assert!(trip.is_direct());
        trip.transfers = 2;
        assert!(!trip.is_direct());
    }

    #[test]
    fn delay_severity_follows_delay() {
        let mut trip = make_trip(120);
        assert_eq!(trip.delay_severity(), DelaySeverity::OnTime);
        trip.delay = Some(12);
        assert_eq!(trip.delay_severity(), DelaySeverity::Major);
    }
}
