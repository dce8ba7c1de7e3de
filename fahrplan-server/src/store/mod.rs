//! External-backend collaborators: identity and document persistence.
//!
//! These stand in for the managed auth and document-database services the
//! deployment delegates durable state to. The in-process implementations
//! keep the same contracts: per-user collections ordered newest-first, live
//! full-list subscriptions, and a single ambient identity channel.

pub mod documents;
mod error;
mod favorites;
mod history;
mod identity;

pub use documents::{DocumentStore, FavoriteRoute, SearchHistoryItem};
pub use error::{AuthError, StoreError};
pub use favorites::Favorites;
pub use history::History;
pub use identity::{Identity, User};
