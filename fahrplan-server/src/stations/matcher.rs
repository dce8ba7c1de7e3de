//! Station autocomplete matching.

use std::sync::Arc;

use crate::domain::Station;

use super::directory::StationDirectory;

/// Minimum query length before any matching happens.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of suggestions returned.
pub const MAX_MATCHES: usize = 8;

/// Match stations for an autocomplete query.
///
/// Returns every station whose name or city contains `query`
/// case-insensitively, in directory order, truncated to the first
/// [`MAX_MATCHES`]. Queries shorter than [`MIN_QUERY_LEN`] characters
/// return an empty list; there are no error conditions.
pub fn match_stations(directory: &StationDirectory, query: &str) -> Vec<Arc<Station>> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    directory
        .all()
        .iter()
        .filter(|s| s.matches(query))
        .take(MAX_MATCHES)
        .cloned()
        .collect()
}
