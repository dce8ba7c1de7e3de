//! Web layer for the trip search service.
//!
//! Provides the JSON API for station autocomplete, trip search, auth,
//! favorites and history, plus the static front-end.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
