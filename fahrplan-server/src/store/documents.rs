//! In-process document store.
//!
//! Stands in for the managed document database: two collections
//! (`favorite_routes` and `search_history`), filtered by owning user and
//! ordered newest-first. Live subscriptions are watch channels that replace
//! the subscriber's whole list on every delivery; dropping the receiver ends
//! the subscription.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::{RwLock, watch};

use super::error::StoreError;

/// Newest entries kept visible per user in `search_history` queries.
pub const HISTORY_LIMIT: usize = 10;

/// A saved route, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRoute {
    /// Generated document id
    pub id: String,

    /// User-chosen label
    pub name: String,

    /// Origin display name (plain text, not a directory reference)
    pub from_station: String,

    /// Destination display name
    pub to_station: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One recorded search, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistoryItem {
    /// Generated document id
    pub id: String,

    /// Origin display name
    pub from_station: String,

    /// Destination display name
    pub to_station: String,

    /// Travel date the user searched for
    pub search_date: NaiveDate,

    /// Travel time the user searched for, "HH:MM"
    pub search_time: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Collections and their live subscriptions.
#[derive(Debug, Default)]
struct Collections {
    /// `favorite_routes` documents, per user, in insertion order
    favorites: HashMap<String, Vec<FavoriteRoute>>,

    /// `search_history` documents, per user, in insertion order
    history: HashMap<String, Vec<SearchHistoryItem>>,

    /// Per-user favorite subscriptions
    favorite_subs: HashMap<String, watch::Sender<Vec<FavoriteRoute>>>,

    /// Per-user history subscriptions
    history_subs: HashMap<String, watch::Sender<Vec<SearchHistoryItem>>>,

    /// Document id counter
    next_doc_id: u64,
}

impl Collections {
    fn mint_id(&mut self) -> String {
        let id = format!("doc-{}", self.next_doc_id);
        self.next_doc_id += 1;
        id
    }

    /// Favorites view for a user: newest first.
    fn favorites_view(&self, uid: &str) -> Vec<FavoriteRoute> {
        self.favorites
            .get(uid)
            .map(|docs| docs.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// History view for a user: newest first, capped at [`HISTORY_LIMIT`].
    fn history_view(&self, uid: &str) -> Vec<SearchHistoryItem> {
        self.history
            .get(uid)
            .map(|docs| docs.iter().rev().take(HISTORY_LIMIT).cloned().collect())
            .unwrap_or_default()
    }

    fn push_favorites(&mut self, uid: &str) {
        if let Some(tx) = self.favorite_subs.get(uid) {
            tx.send_replace(self.favorites_view(uid));
        }
    }

    fn push_history(&mut self, uid: &str) {
        if let Some(tx) = self.history_subs.get(uid) {
            tx.send_replace(self.history_view(uid));
        }
    }
}

/// Cloneable handle to the document store.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<Collections>>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a favorite route for a user.
    pub async fn add_favorite(
        &self,
        uid: &str,
        name: &str,
        from_station: &str,
        to_station: &str,
    ) -> Result<FavoriteRoute, StoreError> {
        let mut inner = self.inner.write().await;
        let favorite = FavoriteRoute {
            id: inner.mint_id(),
            name: name.to_string(),
            from_station: from_station.to_string(),
            to_station: to_station.to_string(),
            created_at: Utc::now(),
        };
        inner
            .favorites
            .entry(uid.to_string())
            .or_default()
            .push(favorite.clone());
        inner.push_favorites(uid);
        Ok(favorite)
    }

    /// Delete one favorite by document id.
    pub async fn remove_favorite(&self, uid: &str, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let docs = inner.favorites.entry(uid.to_string()).or_default();
        let before = docs.len();
        docs.retain(|f| f.id != id);
        if docs.len() == before {
            return Err(StoreError::NotFound {
                collection: "favorite_routes",
                id: id.to_string(),
            });
        }
        inner.push_favorites(uid);
        Ok(())
    }

    /// All favorites for a user, newest first.
    pub async fn favorites_for(&self, uid: &str) -> Vec<FavoriteRoute> {
        self.inner.read().await.favorites_view(uid)
    }

    /// One favorite by document id.
    pub async fn favorite(&self, uid: &str, id: &str) -> Result<FavoriteRoute, StoreError> {
        self.inner
            .read()
            .await
            .favorites
            .get(uid)
            .and_then(|docs| docs.iter().find(|f| f.id == id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                collection: "favorite_routes",
                id: id.to_string(),
            })
    }

    /// Subscribe to a user's favorites.
    ///
    /// Each delivery replaces the whole list; the current list is visible
    /// immediately.
    pub async fn subscribe_favorites(&self, uid: &str) -> watch::Receiver<Vec<FavoriteRoute>> {
        let mut inner = self.inner.write().await;
        let view = inner.favorites_view(uid);
        inner
            .favorite_subs
            .entry(uid.to_string())
            .or_insert_with(|| watch::channel(view).0)
            .subscribe()
    }

    /// Insert a search-history entry for a user.
    pub async fn add_history(
        &self,
        uid: &str,
        from_station: &str,
        to_station: &str,
        search_date: NaiveDate,
        search_time: &str,
    ) -> Result<SearchHistoryItem, StoreError> {
        let mut inner = self.inner.write().await;
        let item = SearchHistoryItem {
            id: inner.mint_id(),
            from_station: from_station.to_string(),
            to_station: to_station.to_string(),
            search_date,
            search_time: search_time.to_string(),
            created_at: Utc::now(),
        };
        inner
            .history
            .entry(uid.to_string())
            .or_default()
            .push(item.clone());
        inner.push_history(uid);
        Ok(item)
    }

    /// A user's search history, newest first, capped at [`HISTORY_LIMIT`].
    pub async fn history_for(&self, uid: &str) -> Vec<SearchHistoryItem> {
        self.inner.read().await.history_view(uid)
    }

    /// One history entry by document id.
    pub async fn history_item(&self, uid: &str, id: &str) -> Result<SearchHistoryItem, StoreError> {
        self.inner
            .read()
            .await
            .history
            .get(uid)
            .and_then(|docs| docs.iter().find(|h| h.id == id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                collection: "search_history",
                id: id.to_string(),
            })
    }

    /// Delete all history entries for a user. Returns the number removed.
    pub async fn clear_history(&self, uid: &str) -> Result<usize, StoreError> {
        let mut inner = self.inner.write().await;
        let removed = inner.history.remove(uid).map(|d| d.len()).unwrap_or(0);
        inner.push_history(uid);
        Ok(removed)
    }

    /// Subscribe to a user's search history.
    pub async fn subscribe_history(&self, uid: &str) -> watch::Receiver<Vec<SearchHistoryItem>> {
        let mut inner = self.inner.write().await;
        let view = inner.history_view(uid);
        inner
            .history_subs
            .entry(uid.to_string())
            .or_insert_with(|| watch::channel(view).0)
            .subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn favorites_are_per_user_newest_first() {
        let store = DocumentStore::new();
        store
            .add_favorite("user-1", "Pendeln", "Berlin", "Hamburg")
            .await
            .unwrap();
        store
            .add_favorite("user-1", "Wochenende", "Berlin", "München")
            .await
            .unwrap();
        store
            .add_favorite("user-2", "Arbeit", "Köln", "Essen")
            .await
            .unwrap();

        let favorites = store.favorites_for("user-1").await;
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].name, "Wochenende");
        assert_eq!(favorites[1].name, "Pendeln");

        assert_eq!(store.favorites_for("user-2").await.len(), 1);
        assert!(store.favorites_for("user-3").await.is_empty());
    }

    #[tokio::test]
    async fn remove_favorite_by_id() {
        let store = DocumentStore::new();
        let fav = store
            .add_favorite("user-1", "Pendeln", "Berlin", "Hamburg")
            .await
            .unwrap();

        store.remove_favorite("user-1", &fav.id).await.unwrap();
        assert!(store.favorites_for("user-1").await.is_empty());

        let err = store.remove_favorite("user-1", &fav.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn history_is_capped_and_clearable() {
        let store = DocumentStore::new();
        for i in 0..13 {
            store
                .add_history("user-1", &format!("From {i}"), "Hamburg", date(), "09:00")
                .await
                .unwrap();
        }

        let history = store.history_for("user-1").await;
        assert_eq!(history.len(), HISTORY_LIMIT);
        // Newest first: the last insert leads.
        assert_eq!(history[0].from_station, "From 12");
        assert_eq!(history[9].from_station, "From 3");

        let removed = store.clear_history("user-1").await.unwrap();
        assert_eq!(removed, 13);
        assert!(store.history_for("user-1").await.is_empty());
    }

    #[tokio::test]
    async fn favorite_subscription_replaces_whole_list() {
        let store = DocumentStore::new();
        let mut rx = store.subscribe_favorites("user-1").await;
        assert!(rx.borrow().is_empty());

        store
            .add_favorite("user-1", "Pendeln", "Berlin", "Hamburg")
            .await
            .unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);

        // Another user's change is not delivered on this subscription.
        store
            .add_favorite("user-2", "Arbeit", "Köln", "Essen")
            .await
            .unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn history_subscription_sees_clear() {
        let store = DocumentStore::new();
        store
            .add_history("user-1", "Berlin", "Hamburg", date(), "09:00")
            .await
            .unwrap();

        let mut rx = store.subscribe_history("user-1").await;
        assert_eq!(rx.borrow().len(), 1);

        store.clear_history("user-1").await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_empty());
    }
}
