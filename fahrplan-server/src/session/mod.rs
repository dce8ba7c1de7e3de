//! Search session orchestration.
//!
//! The session controller validates user-entered search parameters, records
//! the query into the signed-in user's history (best-effort), runs the trip
//! generator after a simulated network delay, and holds the transient result
//! list for display. Results are never persisted; a new search simply
//! replaces them (last write wins, no request fencing).

mod notify;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;

use crate::domain::Trip;
use crate::stations::StationDirectory;
use crate::store::{History, User};
use crate::trips::{GeneratorConfig, SortKey, generate, sort_trips};

pub use notify::{Notification, NotificationKind, Notifier};

/// Default travel time used by the shortcut entry points.
const SHORTCUT_TIME: &str = "09:00";

/// User-entered search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Origin free text
    pub from: String,

    /// Destination free text
    pub to: String,

    /// Travel date
    pub date: NaiveDate,

    /// Travel time, "HH:MM"
    pub time: String,
}

/// Build the search parameters used by the shortcut entry points.
///
/// Both "repeat a past search" and "select a favorite route" search for
/// today at a fixed default time, discarding the original entry's date and
/// time.
pub fn shortcut_params(from: impl Into<String>, to: impl Into<String>) -> SearchParams {
    SearchParams {
        from: from.into(),
        to: to.into(),
        date: Local::now().date_naive(),
        time: SHORTCUT_TIME.to_string(),
    }
}

/// Error from submitting a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination was empty after trimming.
    #[error("origin and destination are required")]
    MissingStations,
}

/// Session tuning knobs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Artificial delay before results appear, simulating network latency.
    pub simulated_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(1500),
        }
    }
}

/// Transient per-session display state.
#[derive(Debug, Default)]
struct ResultsState {
    trips: Vec<Trip>,
    sort: SortKey,
    loading: bool,
    has_searched: bool,
}

/// A view of the current results for display.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub trips: Vec<Trip>,
    pub sort: SortKey,
    pub loading: bool,
    pub has_searched: bool,
}

/// Cloneable search session controller.
#[derive(Debug, Clone)]
pub struct SearchSession {
    directory: StationDirectory,
    generator_config: Arc<GeneratorConfig>,
    config: Arc<SessionConfig>,
    history: History,
    notifier: Notifier,
    state: Arc<RwLock<ResultsState>>,
}

impl SearchSession {
    /// Create a session controller.
    pub fn new(
        directory: StationDirectory,
        generator_config: GeneratorConfig,
        config: SessionConfig,
        history: History,
        notifier: Notifier,
    ) -> Self {
        Self {
            directory,
            generator_config: Arc::new(generator_config),
            config: Arc::new(config),
            history,
            notifier,
            state: Arc::new(RwLock::new(ResultsState::default())),
        }
    }

    /// Run a search for the given parameters.
    ///
    /// Both stations must be non-empty after trimming, otherwise the search
    /// is not submitted: one error notification, no history write, and the
    /// generator is never invoked. The silent-fallback resolution inside the
    /// generator makes this boundary the only validation point.
    ///
    /// The identity is passed explicitly; a signed-in user gets a
    /// best-effort history entry before the results arrive.
    pub async fn search(
        &self,
        params: &SearchParams,
        user: Option<&User>,
    ) -> Result<Vec<Trip>, SearchError> {
        let from = params.from.trim();
        let to = params.to.trim();
        if from.is_empty() || to.is_empty() {
            self.notifier.error("Bitte Start und Ziel angeben");
            return Err(SearchError::MissingStations);
        }

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.has_searched = true;
        }

        self.history
            .record(user, from, to, params.date, &params.time)
            .await;

        // Simulated network latency. Overlapping searches are not fenced;
        // whichever completes last overwrites the displayed results.
        tokio::time::sleep(self.config.simulated_latency).await;

        let mut trips = generate(&self.directory, &self.generator_config, from, to, params.date);

        let mut state = self.state.write().await;
        sort_trips(&mut trips, state.sort);
        state.trips = trips.clone();
        state.loading = false;

        Ok(trips)
    }

    /// Change the active ordering and re-sort the held results.
    pub async fn set_sort(&self, sort: SortKey) -> Vec<Trip> {
        let mut state = self.state.write().await;
        state.sort = sort;
        sort_trips(&mut state.trips, sort);
        state.trips.clone()
    }

    /// Snapshot of the current display state.
    pub async fn results(&self) -> ResultsView {
        let state = self.state.read().await;
        ResultsView {
            trips: state.trips.clone(),
            sort: state.sort,
            loading: state.loading,
            has_searched: state.has_searched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;

    fn session() -> (SearchSession, tokio::sync::mpsc::UnboundedReceiver<Notification>) {
        let (notifier, rx) = Notifier::new();
        let store = DocumentStore::new();
        let history = History::new(store, notifier.clone());
        let session = SearchSession::new(
            StationDirectory::new(),
            GeneratorConfig::default(),
            SessionConfig {
                simulated_latency: Duration::ZERO,
            },
            history,
            notifier,
        );
        (session, rx)
    }

    fn params(from: &str, to: &str) -> SearchParams {
        SearchParams {
            from: from.to_string(),
            to: to.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: "09:00".to_string(),
        }
    }

    fn user() -> User {
        User {
            uid: "user-1".to_string(),
            email: "a@example.com".to_string(),
            display_name: "Anna".to_string(),
        }
    }

    #[tokio::test]
    async fn search_produces_a_batch_and_stores_it() {
        let (session, _rx) = session();
        let trips = session
            .search(&params("Berlin", "München"), None)
            .await
            .unwrap();
        assert_eq!(trips.len(), 12);

        let view = session.results().await;
        assert_eq!(view.trips.len(), 12);
        assert!(!view.loading);
        assert!(view.has_searched);
    }

    #[tokio::test]
    async fn empty_origin_never_reaches_the_generator() {
        let (session, mut rx) = session();

        let err = session.search(&params("", "München"), None).await.unwrap_err();
        assert_eq!(err, SearchError::MissingStations);

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(rx.try_recv().is_err(), "exactly one notification");

        let view = session.results().await;
        assert!(view.trips.is_empty());
        assert!(!view.has_searched);
    }

    #[tokio::test]
    async fn whitespace_only_destination_rejected() {
        let (session, _rx) = session();
        let err = session
            .search(&params("Berlin", "   "), None)
            .await
            .unwrap_err();
        assert_eq!(err, SearchError::MissingStations);
    }

    #[tokio::test]
    async fn signed_in_search_records_history_once() {
        let (session, _rx) = session();
        let user = user();

        session
            .search(&params("  Berlin ", "Hamburg"), Some(&user))
            .await
            .unwrap();

        let history = session.history.list(Some(&user)).await;
        assert_eq!(history.len(), 1);
        // The trimmed text is what gets recorded.
        assert_eq!(history[0].from_station, "Berlin");
        assert_eq!(history[0].to_station, "Hamburg");
        assert_eq!(history[0].search_time, "09:00");
    }

    #[tokio::test]
    async fn signed_out_search_records_nothing() {
        let (session, _rx) = session();
        session.search(&params("Berlin", "Hamburg"), None).await.unwrap();
        assert!(session.history.list(Some(&user())).await.is_empty());
    }

    #[tokio::test]
    async fn set_sort_reorders_held_results() {
        let (session, _rx) = session();
        session.search(&params("Berlin", "Hamburg"), None).await.unwrap();

        let by_duration = session.set_sort(SortKey::Duration).await;
        for window in by_duration.windows(2) {
            assert!(window[0].duration_mins <= window[1].duration_mins);
        }

        let by_price = session.set_sort(SortKey::Price).await;
        for window in by_price.windows(2) {
            assert!(window[0].price.unwrap_or(0.0) <= window[1].price.unwrap_or(0.0));
        }
    }

    #[tokio::test]
    async fn later_search_overwrites_earlier_results() {
        let (session, _rx) = session();
        session.search(&params("Berlin", "Hamburg"), None).await.unwrap();
        session.search(&params("Köln", "Dresden"), None).await.unwrap();

        let view = session.results().await;
        assert_eq!(view.trips[0].from.name, "Köln Hauptbahnhof");
        assert_eq!(view.trips[0].to.name, "Dresden Hauptbahnhof");
    }

    #[test]
    fn shortcut_uses_today_and_default_time() {
        let params = shortcut_params("Berlin", "Hamburg");
        assert_eq!(params.date, Local::now().date_naive());
        assert_eq!(params.time, "09:00");
        assert_eq!(params.from, "Berlin");
        assert_eq!(params.to, "Hamburg");
    }
}
