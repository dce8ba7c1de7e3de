//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::session::{Notification, Notifier, SearchSession, SessionConfig};
use crate::stations::StationDirectory;
use crate::store::{DocumentStore, Favorites, History, Identity};
use crate::trips::GeneratorConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Every field is a
/// cloneable handle; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Station directory for autocomplete and resolution
    pub directory: StationDirectory,

    /// Search session controller
    pub session: SearchSession,

    /// Identity provider collaborator
    pub identity: Identity,

    /// Favorites service
    pub favorites: Favorites,

    /// Search-history service
    pub history: History,

    /// Notification sink handed to services
    pub notifier: Notifier,

    /// Pending notifications, drained by the toast endpoint
    pub notifications: Arc<Mutex<UnboundedReceiver<Notification>>>,
}

impl AppState {
    /// Wire up a complete application state.
    pub fn new(
        directory: StationDirectory,
        generator_config: GeneratorConfig,
        session_config: SessionConfig,
    ) -> Self {
        let (notifier, notifications) = Notifier::new();
        let store = DocumentStore::new();
        let identity = Identity::new();
        let favorites = Favorites::new(store.clone(), notifier.clone());
        let history = History::new(store, notifier.clone());
        let session = SearchSession::new(
            directory.clone(),
            generator_config,
            session_config,
            history.clone(),
            notifier.clone(),
        );

        Self {
            directory,
            session,
            identity,
            favorites,
            history,
            notifier,
            notifications: Arc::new(Mutex::new(notifications)),
        }
    }

    /// Drain all pending notifications.
    pub async fn drain_notifications(&self) -> Vec<Notification> {
        let mut rx = self.notifications.lock().await;
        let mut drained = Vec::new();
        while let Ok(n) = rx.try_recv() {
            drained.push(n);
        }
        drained
    }
}
