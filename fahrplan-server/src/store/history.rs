//! Search-history service.
//!
//! Recording a search is best-effort: a failed append is logged and
//! swallowed so the search itself never blocks on it. Clearing the history
//! is an explicit user action and notifies its outcome.

use chrono::NaiveDate;
use tokio::sync::watch;

use crate::session::Notifier;

use super::documents::{DocumentStore, SearchHistoryItem};
use super::identity::User;

/// Cloneable history service handle.
#[derive(Debug, Clone)]
pub struct History {
    store: DocumentStore,
    notifier: Notifier,
}

impl History {
    /// Create a history service over a store.
    pub fn new(store: DocumentStore, notifier: Notifier) -> Self {
        Self { store, notifier }
    }

    /// Record a search, best-effort.
    ///
    /// No-op when signed out. Failures are logged and swallowed without a
    /// notification; the caller proceeds regardless.
    pub async fn record(
        &self,
        user: Option<&User>,
        from_station: &str,
        to_station: &str,
        search_date: NaiveDate,
        search_time: &str,
    ) {
        let Some(user) = user else {
            return;
        };

        if let Err(e) = self
            .store
            .add_history(&user.uid, from_station, to_station, search_date, search_time)
            .await
        {
            tracing::warn!(uid = %user.uid, error = %e, "failed to record search history");
        }
    }

    /// The user's history, newest first, capped by the store's query limit.
    /// Empty when signed out.
    pub async fn list(&self, user: Option<&User>) -> Vec<SearchHistoryItem> {
        match user {
            Some(user) => self.store.history_for(&user.uid).await,
            None => Vec::new(),
        }
    }

    /// One history entry by id, if it belongs to the user.
    pub async fn get(&self, user: &User, id: &str) -> Option<SearchHistoryItem> {
        self.store.history_item(&user.uid, id).await.ok()
    }

    /// Delete the user's entire history. Silent no-op when signed out;
    /// otherwise notifies the outcome exactly once.
    pub async fn clear(&self, user: Option<&User>) {
        let Some(user) = user else {
            return;
        };

        match self.store.clear_history(&user.uid).await {
            Ok(removed) => {
                tracing::debug!(uid = %user.uid, removed, "cleared search history");
                self.notifier.success("Verlauf gelöscht");
            }
            Err(e) => {
                tracing::warn!(uid = %user.uid, error = %e, "failed to clear search history");
                self.notifier.error("Fehler beim Löschen des Verlaufs");
            }
        }
    }

    /// Live subscription to the user's history.
    pub async fn subscribe(&self, user: &User) -> watch::Receiver<Vec<SearchHistoryItem>> {
        self.store.subscribe_history(&user.uid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NotificationKind;
    use crate::store::documents::HISTORY_LIMIT;

    fn user() -> User {
        User {
            uid: "user-1".to_string(),
            email: "a@example.com".to_string(),
            display_name: "Anna".to_string(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn record_is_silent() {
        let (notifier, mut rx) = Notifier::new();
        let history = History::new(DocumentStore::new(), notifier);

        history
            .record(Some(&user()), "Berlin", "Hamburg", date(), "09:00")
            .await;
        assert!(rx.try_recv().is_err(), "recording never notifies");
        assert_eq!(history.list(Some(&user())).await.len(), 1);
    }

    #[tokio::test]
    async fn signed_out_record_writes_nothing() {
        let (notifier, _rx) = Notifier::new();
        let store = DocumentStore::new();
        let history = History::new(store.clone(), notifier);

        history.record(None, "Berlin", "Hamburg", date(), "09:00").await;
        assert!(store.history_for("user-1").await.is_empty());
    }

    #[tokio::test]
    async fn list_is_capped() {
        let (notifier, _rx) = Notifier::new();
        let history = History::new(DocumentStore::new(), notifier);
        let user = user();

        for i in 0..12 {
            history
                .record(Some(&user), &format!("From {i}"), "Hamburg", date(), "09:00")
                .await;
        }
        assert_eq!(history.list(Some(&user)).await.len(), HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn clear_notifies_success_once() {
        let (notifier, mut rx) = Notifier::new();
        let history = History::new(DocumentStore::new(), notifier);
        let user = user();

        history
            .record(Some(&user), "Berlin", "Hamburg", date(), "09:00")
            .await;
        history.clear(Some(&user)).await;

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(rx.try_recv().is_err());
        assert!(history.list(Some(&user)).await.is_empty());
    }

    #[tokio::test]
    async fn signed_out_clear_is_silent() {
        let (notifier, mut rx) = Notifier::new();
        let history = History::new(DocumentStore::new(), notifier);

        history.clear(None).await;
        assert!(rx.try_recv().is_err());
    }
}
