//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::format::{format_delay, format_duration, format_price, format_time};
use crate::domain::{Connection, Station, Trip};
use crate::store::{FavoriteRoute, SearchHistoryItem, User};

/// Request to search stations for autocomplete.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text query
    pub q: String,
}

/// A station in autocomplete results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Directory id
    pub id: String,

    /// Display name
    pub name: String,

    /// City, if known
    pub city: Option<String>,
}

/// Response for station autocomplete.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching stations, directory order, at most 8
    pub stations: Vec<StationResult>,
}

/// Request to run a trip search.
#[derive(Debug, Deserialize)]
pub struct TripSearchRequest {
    /// Origin free text
    pub from: String,

    /// Destination free text
    pub to: String,

    /// Travel date, "YYYY-MM-DD"
    pub date: String,

    /// Travel time, "HH:MM" (recorded in history, not used for generation)
    pub time: Option<String>,
}

/// Query for re-sorting current results.
#[derive(Debug, Deserialize)]
pub struct TripsQuery {
    /// Sort key: departure, duration or price
    pub sort: Option<String>,
}

/// A leg in a trip result.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub id: String,
    pub from: String,
    pub to: String,

    /// Departure, "HH:MM"
    pub departure: String,

    /// Arrival, "HH:MM"
    pub arrival: String,

    pub platform: Option<String>,
    pub train_type: String,
    pub train_number: String,
    pub delay_mins: Option<u32>,
}

/// A trip in search results.
#[derive(Debug, Serialize)]
pub struct TripResult {
    pub id: String,
    pub from: String,
    pub to: String,

    /// Departure, "HH:MM"
    pub departure: String,

    /// Arrival, "HH:MM"
    pub arrival: String,

    /// Travel time in minutes
    pub duration_mins: u32,

    /// Travel time for display, e.g. "4h 25min"
    pub duration: String,

    /// Number of changes; 0 renders as "direct"
    pub transfers: u32,

    /// True when the trip has no changes
    pub direct: bool,

    pub delay_mins: Option<u32>,

    /// Delay badge text, e.g. "Pünktlich" or "+7min"
    pub delay: String,

    /// Badge severity band: "on-time", "minor" or "major"
    pub delay_severity: String,

    pub platform: Option<String>,
    pub train_type: String,
    pub train_number: String,

    /// Price for display, e.g. "€79.90"
    pub price: Option<String>,

    /// Legs in travel order, never empty
    pub connections: Vec<ConnectionResult>,
}

/// Response for trip search and re-sort.
#[derive(Debug, Serialize)]
pub struct TripSearchResponse {
    /// Active sort key
    pub sort: String,

    /// Results in the active order
    pub trips: Vec<TripResult>,
}

/// Request to register an account.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Request to sign in.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// The signed-in user.
#[derive(Debug, Serialize)]
pub struct UserResult {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Request to save a favorite route.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    /// User-chosen label
    pub name: String,
    pub from_station: String,
    pub to_station: String,
}

/// A favorite route.
#[derive(Debug, Serialize)]
pub struct FavoriteResult {
    pub id: String,
    pub name: String,
    pub from_station: String,
    pub to_station: String,

    /// Creation time, RFC 3339
    pub created_at: String,
}

/// A search-history entry.
#[derive(Debug, Serialize)]
pub struct HistoryResult {
    pub id: String,
    pub from_station: String,
    pub to_station: String,

    /// Travel date searched for, "YYYY-MM-DD"
    pub search_date: String,

    /// Travel time searched for, "HH:MM"
    pub search_time: String,

    /// Creation time, RFC 3339
    pub created_at: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            city: station.city.clone(),
        }
    }
}

impl ConnectionResult {
    /// Create from a domain Connection.
    pub fn from_connection(conn: &Connection) -> Self {
        Self {
            id: conn.id.clone(),
            from: conn.from.name.clone(),
            to: conn.to.name.clone(),
            departure: format_time(&conn.departure),
            arrival: format_time(&conn.arrival),
            platform: conn.platform.clone(),
            train_type: conn.train_type.as_str().to_string(),
            train_number: conn.train_number.clone(),
            delay_mins: conn.delay,
        }
    }
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            id: trip.id.clone(),
            from: trip.from.name.clone(),
            to: trip.to.name.clone(),
            departure: format_time(&trip.departure),
            arrival: format_time(&trip.arrival),
            duration_mins: trip.duration_mins,
            duration: format_duration(trip.duration_mins),
            transfers: trip.transfers,
            direct: trip.is_direct(),
            delay_mins: trip.delay,
            delay: format_delay(trip.delay),
            delay_severity: trip.delay_severity().as_str().to_string(),
            platform: trip.platform.clone(),
            train_type: trip.train_type.as_str().to_string(),
            train_number: trip.train_number.clone(),
            price: trip.price.map(format_price),
            connections: trip
                .connections
                .iter()
                .map(ConnectionResult::from_connection)
                .collect(),
        }
    }
}

impl UserResult {
    /// Create from a store User.
    pub fn from_user(user: &User) -> Self {
        Self {
            uid: user.uid.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        }
    }
}

impl FavoriteResult {
    /// Create from a store FavoriteRoute.
    pub fn from_favorite(favorite: &FavoriteRoute) -> Self {
        Self {
            id: favorite.id.clone(),
            name: favorite.name.clone(),
            from_station: favorite.from_station.clone(),
            to_station: favorite.to_station.clone(),
            created_at: favorite.created_at.to_rfc3339(),
        }
    }
}

impl HistoryResult {
    /// Create from a store SearchHistoryItem.
    pub fn from_item(item: &SearchHistoryItem) -> Self {
        Self {
            id: item.id.clone(),
            from_station: item.from_station.clone(),
            to_station: item.to_station.clone(),
            search_date: item.search_date.format("%Y-%m-%d").to_string(),
            search_time: item.search_time.clone(),
            created_at: item.created_at.to_rfc3339(),
        }
    }
}
