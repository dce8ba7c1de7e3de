//! Favorite-route service.
//!
//! Wraps the document store with the authentication gate and the
//! one-notification-per-mutation contract.

use tokio::sync::watch;

use crate::session::Notifier;

use super::documents::{DocumentStore, FavoriteRoute};
use super::identity::User;

/// Cloneable favorites service handle.
#[derive(Debug, Clone)]
pub struct Favorites {
    store: DocumentStore,
    notifier: Notifier,
}

impl Favorites {
    /// Create a favorites service over a store.
    pub fn new(store: DocumentStore, notifier: Notifier) -> Self {
        Self { store, notifier }
    }

    /// Save a favorite route for the given user.
    ///
    /// Unauthenticated calls produce exactly one error notification and
    /// write nothing. Authenticated calls produce exactly one success or
    /// error notification.
    pub async fn add(
        &self,
        user: Option<&User>,
        name: &str,
        from_station: &str,
        to_station: &str,
    ) -> Option<FavoriteRoute> {
        let Some(user) = user else {
            self.notifier
                .error("Bitte melden Sie sich an, um Favoriten zu speichern");
            return None;
        };

        match self
            .store
            .add_favorite(&user.uid, name, from_station, to_station)
            .await
        {
            Ok(favorite) => {
                self.notifier.success("Favorit hinzugefügt");
                Some(favorite)
            }
            Err(e) => {
                tracing::warn!(uid = %user.uid, error = %e, "failed to add favorite");
                self.notifier.error("Fehler beim Hinzufügen des Favoriten");
                None
            }
        }
    }

    /// Delete a favorite by id.
    ///
    /// Without a signed-in user this is a silent no-op, matching the add
    /// path's asymmetry in the shipped behavior.
    pub async fn remove(&self, user: Option<&User>, id: &str) {
        let Some(user) = user else {
            return;
        };

        match self.store.remove_favorite(&user.uid, id).await {
            Ok(()) => self.notifier.success("Favorit entfernt"),
            Err(e) => {
                tracing::warn!(uid = %user.uid, id, error = %e, "failed to remove favorite");
                self.notifier.error("Fehler beim Entfernen des Favoriten");
            }
        }
    }

    /// The user's favorites, newest first. Empty when signed out.
    pub async fn list(&self, user: Option<&User>) -> Vec<FavoriteRoute> {
        match user {
            Some(user) => self.store.favorites_for(&user.uid).await,
            None => Vec::new(),
        }
    }

    /// One favorite by id, if it belongs to the user.
    pub async fn get(&self, user: &User, id: &str) -> Option<FavoriteRoute> {
        self.store.favorite(&user.uid, id).await.ok()
    }

    /// Live subscription to the user's favorites.
    pub async fn subscribe(&self, user: &User) -> watch::Receiver<Vec<FavoriteRoute>> {
        self.store.subscribe_favorites(&user.uid).await
    }
}
