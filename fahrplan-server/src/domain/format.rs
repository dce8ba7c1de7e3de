//! Display formatting helpers.
//!
//! Times, durations, delays and prices cross the wire as pre-formatted
//! strings; these helpers keep the formatting rules in one place.

use chrono::NaiveDateTime;

/// Format a timestamp as "HH:MM".
pub fn format_time(t: &NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// Format a duration in minutes as "2h 5min", "3h" or "45min".
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}min"),
    }
}

/// Format a delay badge: "Pünktlich" when on time, otherwise "+Nmin".
pub fn format_delay(delay: Option<u32>) -> String {
    match delay {
        None | Some(0) => "Pünktlich".to_string(),
        Some(d) => format!("+{d}min"),
    }
}

/// Format a price in euros, e.g. "€59.90".
pub fn format_price(price: f64) -> String {
    format!("€{price:.2}")
}
