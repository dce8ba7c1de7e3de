//! Mock trip synthesis.
//!
//! There is no real timetable behind this service; each search produces a
//! fresh batch of plausible trips from a non-seeded random source. Tests
//! therefore assert structural invariants of a batch, never exact output.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Connection, TrainType, Trip};
use crate::stations::StationDirectory;

use super::config::GeneratorConfig;

/// Directory index used when the origin text matches nothing.
const ORIGIN_FALLBACK: usize = 0;

/// Directory index used when the destination text matches nothing.
const DESTINATION_FALLBACK: usize = 1;

/// Generate a batch of candidate trips for a search.
///
/// `from_text` and `to_text` resolve to the first directory entry whose name
/// contains them case-insensitively; unrecognized text silently falls back to
/// a fixed directory entry rather than failing. Input validation is the
/// caller's job.
///
/// The returned batch has exactly `config.batch_size` trips, sorted ascending
/// by departure time, each with exactly one connection.
pub fn generate(
    directory: &StationDirectory,
    config: &GeneratorConfig,
    from_text: &str,
    to_text: &str,
    date: NaiveDate,
) -> Vec<Trip> {
    let from = directory.resolve(from_text, ORIGIN_FALLBACK);
    let to = directory.resolve(to_text, DESTINATION_FALLBACK);

    let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    let mut rng = rand::thread_rng();

    let mut trips: Vec<Trip> = (0..config.batch_size)
        .map(|i| {
            let departure = departure_slot(midnight, config, i, &mut rng);
            let duration_mins =
                rng.gen_range(config.min_duration_mins..config.max_duration_mins);
            let arrival = departure + Duration::minutes(i64::from(duration_mins));

            let transfers = rng.gen_range(0..=config.max_transfers);
            let delay = if rng.gen_bool(config.on_time_probability) {
                None
            } else {
                // This branch can still roll a 0, which displays as on-time.
                Some(rng.gen_range(0..config.max_delay_mins))
            };

            let train_type = *TrainType::ALL
                .choose(&mut rng)
                .expect("train type table is non-empty");

            // The connection mirrors the trip but re-rolls platform and train
            // number independently, matching the original timetable mock.
            let connection = Connection {
                id: format!("conn-{i}-0"),
                from: from.clone(),
                to: to.clone(),
                departure,
                arrival,
                platform: Some(roll_platform(config, &mut rng)),
                train_type,
                train_number: roll_train_number(&mut rng),
                delay,
            };

            let price = train_type.base_fare() + rng.gen_range(0.0..config.price_spread);

            let mut trip = Trip::new(
                format!("trip-{i}"),
                from.clone(),
                to.clone(),
                departure,
                duration_mins,
                train_type,
                roll_train_number(&mut rng),
                connection,
            );
            trip.transfers = transfers;
            trip.delay = delay;
            trip.platform = Some(roll_platform(config, &mut rng));
            trip.price = Some(price);
            trip
        })
        .collect();

    trips.sort_by_key(|t| t.departure);
    trips
}

/// Departure time for slot `i`: the slot's base minute plus random jitter.
fn departure_slot(
    midnight: NaiveDateTime,
    config: &GeneratorConfig,
    i: usize,
    rng: &mut impl Rng,
) -> NaiveDateTime {
    let base = config.first_departure_mins + (i as u32) * config.slot_spacing_mins;
    let jitter = rng.gen_range(0..config.jitter_mins);
    midnight + Duration::minutes(i64::from(base + jitter))
}

/// A random 4-digit train number.
fn roll_train_number(rng: &mut impl Rng) -> String {
    rng.gen_range(1000..10000u32).to_string()
}

/// A random platform between 1 and `platform_count`.
fn roll_platform(config: &GeneratorConfig, rng: &mut impl Rng) -> String {
    rng.gen_range(1..=config.platform_count).to_string()
}
