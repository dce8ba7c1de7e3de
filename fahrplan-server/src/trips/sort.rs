//! Result ordering for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Trip;

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {key}")]
pub struct UnknownSortKey {
    key: String,
}

/// The ordering applied to a displayed result batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by departure time (the generator's own order).
    #[default]
    Departure,
    /// Ascending by total travel time.
    Duration,
    /// Ascending by price; unpriced trips sort first.
    Price,
}

impl SortKey {
    /// Returns the key's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Departure => "departure",
            SortKey::Duration => "duration",
            SortKey::Price => "price",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "departure" => Ok(SortKey::Departure),
            "duration" => Ok(SortKey::Duration),
            "price" => Ok(SortKey::Price),
            _ => Err(UnknownSortKey { key: s.to_string() }),
        }
    }
}

/// Sort trips in place by the given key.
///
/// Each key is a total order; ties are broken arbitrarily. A missing price
/// compares as 0, so unpriced trips end up at the cheap end.
pub fn sort_trips(trips: &mut [Trip], key: SortKey) {
    match key {
        SortKey::Departure => trips.sort_by_key(|t| t.departure),
        SortKey::Duration => trips.sort_by_key(|t| t.duration_mins),
        SortKey::Price => trips.sort_by(|a, b| {
            a.price
                .unwrap_or(0.0)
                .total_cmp(&b.price.unwrap_or(0.0))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Connection, Station, StationId, TrainType};
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::sync::Arc;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn trip(id: &str, dep: NaiveDateTime, duration_mins: u32, price: Option<f64>) -> Trip {
        let from = Arc::new(Station::new(StationId::parse("1").unwrap(), "A"));
        let to = Arc::new(Station::new(StationId::parse("2").unwrap(), "B"));
        let connection = Connection {
            id: format!("{id}-conn"),
            from: from.clone(),
            to: to.clone(),
            departure: dep,
            arrival: dep + Duration::minutes(i64::from(duration_mins)),
            platform: None,
            train_type: TrainType::Ice,
            train_number: "1000".to_string(),
            delay: None,
        };
        let mut t = Trip::new(
            id,
            from,
            to,
            dep,
            duration_mins,
            TrainType::Ice,
            "1000",
            connection,
        );
        t.price = price;
        t
    }

    #[test]
    fn parse_keys() {
        assert_eq!("departure".parse::<SortKey>().unwrap(), SortKey::Departure);
        assert_eq!("duration".parse::<SortKey>().unwrap(), SortKey::Duration);
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert!("fastest".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_by_departure() {
        let mut trips = vec![
            trip("a", dt(12, 0), 180, None),
            trip("b", dt(6, 30), 180, None),
            trip("c", dt(9, 15), 180, None),
        ];
        sort_trips(&mut trips, SortKey::Departure);
        let ids: Vec<_> = trips.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn sort_by_duration_handles_ties_and_singletons() {
        let mut single = vec![trip("a", dt(6, 0), 200, None)];
        sort_trips(&mut single, SortKey::Duration);
        assert_eq!(single[0].id, "a");

        let mut trips = vec![
            trip("a", dt(6, 0), 300, None),
            trip("b", dt(7, 0), 150, None),
            trip("c", dt(8, 0), 150, None),
            trip("d", dt(9, 0), 240, None),
        ];
        sort_trips(&mut trips, SortKey::Duration);
        for window in trips.windows(2) {
            assert!(window[0].duration_mins <= window[1].duration_mins);
        }
    }

    #[test]
    fn missing_price_sorts_as_zero() {
        let mut trips = vec![
            trip("priced", dt(6, 0), 180, Some(79.90)),
            trip("free", dt(7, 0), 180, Some(0.0)),
            trip("unpriced", dt(8, 0), 180, None),
        ];
        sort_trips(&mut trips, SortKey::Price);

        // The unpriced and zero-priced trips share the low end in either order.
        let low: Vec<_> = trips[..2].iter().map(|t| t.id.as_str()).collect();
        assert!(low.contains(&"free"));
        assert!(low.contains(&"unpriced"));
        assert_eq!(trips[2].id, "priced");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_trips() -> impl Strategy<Value = Vec<Trip>> {
            proptest::collection::vec(
                (0u32..1440, 1u32..600, proptest::option::of(0.0f64..200.0)),
                0..20,
            )
            .prop_map(|rows| {
                rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (dep_mins, duration, price))| {
                        trip(
                            &format!("t{i}"),
                            dt(0, 0) + Duration::minutes(i64::from(dep_mins)),
                            duration,
                            price,
                        )
                    })
                    .collect()
            })
        }

        proptest! {
            /// Duration sort is non-decreasing for any input multiset.
            #[test]
            fn duration_sorted(mut trips in arb_trips()) {
                sort_trips(&mut trips, SortKey::Duration);
                for window in trips.windows(2) {
                    prop_assert!(window[0].duration_mins <= window[1].duration_mins);
                }
            }

            /// Price sort is non-decreasing with missing prices counted as 0.
            #[test]
            fn price_sorted(mut trips in arb_trips()) {
                sort_trips(&mut trips, SortKey::Price);
                for window in trips.windows(2) {
                    prop_assert!(
                        window[0].price.unwrap_or(0.0) <= window[1].price.unwrap_or(0.0)
                    );
                }
            }

            /// Sorting never adds or removes trips.
            #[test]
            fn sorting_preserves_ids(mut trips in arb_trips(), key in prop_oneof![
                Just(SortKey::Departure),
                Just(SortKey::Duration),
                Just(SortKey::Price),
            ]) {
                let mut before: Vec<String> = trips.iter().map(|t| t.id.clone()).collect();
                sort_trips(&mut trips, key);
                let mut after: Vec<String> = trips.iter().map(|t| t.id.clone()).collect();
                before.sort();
                after.sort();
                prop_assert_eq!(before, after);
            }
        }
    }
}
