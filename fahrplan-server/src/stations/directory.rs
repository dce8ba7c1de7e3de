//! The station directory.
//!
//! A fixed table of long-distance stations, loaded once at process start.
//! The directory is the lookup source for autocomplete and for the trip
//! generator's station resolution.

use std::sync::Arc;

use crate::domain::{Coordinates, Station, StationId};

/// Station table: (id, name, city, lat, lng).
const STATION_TABLE: &[(&str, &str, &str, f64, f64)] = &[
    ("1", "Berlin Hauptbahnhof", "Berlin", 52.5251, 13.3694),
    ("2", "München Hauptbahnhof", "München", 48.1402, 11.5581),
    ("3", "Hamburg Hauptbahnhof", "Hamburg", 53.5528, 10.0067),
    ("4", "Köln Hauptbahnhof", "Köln", 50.9429, 6.9583),
    (
        "5",
        "Frankfurt (Main) Hauptbahnhof",
        "Frankfurt am Main",
        50.1072,
        8.6633,
    ),
    ("6", "Stuttgart Hauptbahnhof", "Stuttgart", 48.7840, 9.1829),
    (
        "7",
        "Düsseldorf Hauptbahnhof",
        "Düsseldorf",
        51.2206,
        6.7939,
    ),
    ("8", "Nürnberg Hauptbahnhof", "Nürnberg", 49.4458, 11.0831),
    ("9", "Leipzig Hauptbahnhof", "Leipzig", 51.3459, 12.3821),
    ("10", "Dresden Hauptbahnhof", "Dresden", 51.0407, 13.7320),
    ("11", "Hannover Hauptbahnhof", "Hannover", 52.3759, 9.7417),
    ("12", "Bremen Hauptbahnhof", "Bremen", 53.0831, 8.8135),
    ("13", "Dortmund Hauptbahnhof", "Dortmund", 51.5181, 7.4598),
    ("14", "Essen Hauptbahnhof", "Essen", 51.4508, 7.0131),
    ("15", "Karlsruhe Hauptbahnhof", "Karlsruhe", 49.0093, 8.4044),
];

/// Immutable, ordered station directory.
///
/// Entry order is the table order and doubles as relevance order for
/// autocomplete. Entries are shared via `Arc` so trips can reference
/// stations without copying.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Arc<Vec<Arc<Station>>>,
}

impl StationDirectory {
    /// Build the directory from the fixed table.
    pub fn new() -> Self {
        let stations = STATION_TABLE
            .iter()
            .map(|&(id, name, city, lat, lng)| {
                // The table is static, so the ids are known-valid.
                let id = StationId::parse(id).unwrap_or_else(|e| {
                    panic!("station table contains invalid id {id:?}: {e}")
                });
                Arc::new(Station {
                    id,
                    name: name.to_string(),
                    city: Some(city.to_string()),
                    coordinates: Some(Coordinates { lat, lng }),
                })
            })
            .collect();

        Self {
            stations: Arc::new(stations),
        }
    }

    /// All stations in directory order.
    pub fn all(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Station at a directory position.
    pub fn get(&self, index: usize) -> Option<&Arc<Station>> {
        self.stations.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Resolve free text to a station: the first entry whose *name* contains
    /// the text case-insensitively, else the entry at `fallback`.
    ///
    /// Unrecognized text silently resolves to the fallback rather than
    /// failing; callers that want validation must do it before resolving.
    pub fn resolve(&self, text: &str, fallback: usize) -> Arc<Station> {
        let lowered = text.to_lowercase();
        self.stations
            .iter()
            .find(|s| s.name.to_lowercase().contains(&lowered))
            .unwrap_or(&self.stations[fallback])
            .clone()
    }
}

impl Default for StationDirectory {
    fn default() -> Self {
        Self::new()
    }
}
