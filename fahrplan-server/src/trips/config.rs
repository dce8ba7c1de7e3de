//! Configuration for the mock trip generator.

/// Tunable parameters for trip synthesis.
///
/// The defaults reproduce the shipped timetable shape: 12 trips spread
/// between roughly 05:00 and 22:30, lasting two to seven hours.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of trips per batch.
    pub batch_size: usize,

    /// Minutes past midnight of the first departure slot.
    pub first_departure_mins: u32,

    /// Spacing between departure slots (minutes).
    pub slot_spacing_mins: u32,

    /// Upper bound (exclusive) of the random minute jitter per slot.
    pub jitter_mins: u32,

    /// Minimum trip duration (minutes, inclusive).
    pub min_duration_mins: u32,

    /// Maximum trip duration (minutes, exclusive).
    pub max_duration_mins: u32,

    /// Maximum number of transfers (inclusive; 0 means direct).
    pub max_transfers: u32,

    /// Probability that a trip carries no delay at all.
    pub on_time_probability: f64,

    /// Upper bound (exclusive) of a drawn delay (minutes).
    pub max_delay_mins: u32,

    /// Number of platforms to draw from (1..=platform_count).
    pub platform_count: u32,

    /// Upper bound (exclusive) of the random addend on the base fare.
    pub price_spread: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 12,
            first_departure_mins: 5 * 60,
            slot_spacing_mins: 90,
            jitter_mins: 60,
            min_duration_mins: 120, // 2 hours
            max_duration_mins: 420, // 7 hours
            max_transfers: 3,
            on_time_probability: 0.25,
            max_delay_mins: 20,
            platform_count: 16,
            price_spread: 100.0,
        }
    }
}
