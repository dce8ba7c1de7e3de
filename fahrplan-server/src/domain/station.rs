//! Station types.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier, unique within the directory.
///
/// Station ids are short non-empty strings ("1".."15" in the shipped
/// directory). This type guarantees that any `StationId` value is non-empty
/// and contains no whitespace.
///
/// # Examples
///
/// ```
/// use fahrplan_server::domain::StationId;
///
/// let id = StationId::parse("3").unwrap();
/// assert_eq!(id.as_str(), "3");
///
/// // Empty ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse(" ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty and free of whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A named location in the station directory.
///
/// Stations are loaded once at process start and never mutated; everything
/// that needs one holds a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Unique id within the directory
    pub id: StationId,

    /// Display name, e.g. "Berlin Hauptbahnhof"
    pub name: String,

    /// City the station serves
    pub city: Option<String>,

    /// Geographic position
    pub coordinates: Option<Coordinates>,
}

impl Station {
    /// Create a new station with no city or coordinates.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: None,
            coordinates: None,
        }
    }

    /// Returns true if the station's name or city contains `query`
    /// case-insensitively.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .city
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&query))
    }
}
