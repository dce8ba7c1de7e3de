//! Station directory and autocomplete matching.
//!
//! A static table of long-distance stations, consulted for autocomplete
//! suggestions on every keystroke and for the trip generator's free-text
//! station resolution.

mod directory;
mod matcher;

pub use directory::StationDirectory;
pub use matcher::{MAX_MATCHES, MIN_QUERY_LEN, match_stations};
