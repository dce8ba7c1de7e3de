//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use tower_http::services::ServeDir;

use crate::session::{SearchError, SearchParams, shortcut_params};
use crate::stations::match_stations;
use crate::store::AuthError;
use crate::trips::SortKey;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static front-end directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/trips/search", post(search_trips))
        .route("/api/trips", get(list_trips))
        .route("/api/auth/signup", post(sign_up))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/signout", post(sign_out))
        .route("/api/auth/me", get(current_user))
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/:id", delete(remove_favorite))
        .route("/api/favorites/:id/search", post(search_from_favorite))
        .route("/api/history", get(list_history).delete(clear_history))
        .route("/api/history/:id/repeat", post(repeat_search))
        .route("/api/notifications", get(drain_notifications))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Station autocomplete, consulted on every keystroke.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let stations = match_stations(&state.directory, &req.q)
        .iter()
        .map(|s| StationResult::from_station(s))
        .collect();

    Json(StationSearchResponse { stations })
}

/// Run a trip search.
async fn search_trips(
    State(state): State<AppState>,
    Json(req): Json<TripSearchRequest>,
) -> Result<Json<TripSearchResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&req.date, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest {
            message: format!("Invalid date: {}", req.date),
        }
    })?;

    let params = SearchParams {
        from: req.from,
        to: req.to,
        date,
        time: req.time.unwrap_or_else(|| "09:00".to_string()),
    };

    let user = state.identity.current_user();
    let trips = state.session.search(&params, user.as_ref()).await?;
    let sort = state.session.results().await.sort;

    Ok(Json(TripSearchResponse {
        sort: sort.as_str().to_string(),
        trips: trips.iter().map(TripResult::from_trip).collect(),
    }))
}

/// Current results, optionally re-sorted.
async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripsQuery>,
) -> Result<Json<TripSearchResponse>, AppError> {
    let trips = match query.sort.as_deref() {
        Some(key) => {
            let sort: SortKey = key.parse().map_err(|_| AppError::BadRequest {
                message: format!("Invalid sort key: {key}"),
            })?;
            state.session.set_sort(sort).await
        }
        None => state.session.results().await.trips,
    };
    let sort = state.session.results().await.sort;

    Ok(Json(TripSearchResponse {
        sort: sort.as_str().to_string(),
        trips: trips.iter().map(TripResult::from_trip).collect(),
    }))
}

/// Register a new account and sign it in.
async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<UserResult>, AppError> {
    match state
        .identity
        .sign_up(&req.email, &req.password, &req.display_name)
        .await
    {
        Ok(user) => {
            state.notifier.success("Konto erstellt");
            Ok(Json(UserResult::from_user(&user)))
        }
        Err(e) => {
            state.notifier.error("Registrierung fehlgeschlagen");
            Err(AppError::from(e))
        }
    }
}

/// Sign in with email and password.
async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<UserResult>, AppError> {
    match state.identity.sign_in(&req.email, &req.password).await {
        Ok(user) => {
            state.notifier.success("Erfolgreich angemeldet");
            Ok(Json(UserResult::from_user(&user)))
        }
        Err(e) => {
            state.notifier.error("Anmeldung fehlgeschlagen");
            Err(AppError::from(e))
        }
    }
}

/// Sign the current user out.
async fn sign_out(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    match state.identity.sign_out().await {
        Ok(()) => {
            state.notifier.success("Abgemeldet");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            state.notifier.error("Fehler beim Abmelden");
            Err(AppError::from(e))
        }
    }
}

/// The currently signed-in user, if any.
async fn current_user(State(state): State<AppState>) -> Json<Option<UserResult>> {
    Json(state.identity.current_user().as_ref().map(UserResult::from_user))
}

/// The user's favorites; empty when signed out.
async fn list_favorites(State(state): State<AppState>) -> Json<Vec<FavoriteResult>> {
    let user = state.identity.current_user();
    let favorites = state
        .favorites
        .list(user.as_ref())
        .await
        .iter()
        .map(FavoriteResult::from_favorite)
        .collect();
    Json(favorites)
}

/// Save a favorite route.
async fn add_favorite(
    State(state): State<AppState>,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<Json<FavoriteResult>, AppError> {
    let user = state.identity.current_user();
    match state
        .favorites
        .add(user.as_ref(), &req.name, &req.from_station, &req.to_station)
        .await
    {
        Some(favorite) => Ok(Json(FavoriteResult::from_favorite(&favorite))),
        None if user.is_none() => Err(AppError::Unauthorized {
            message: "Sign in to save favorites".to_string(),
        }),
        None => Err(AppError::Internal {
            message: "Failed to save favorite".to_string(),
        }),
    }
}

/// Delete a favorite.
async fn remove_favorite(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let user = state.identity.current_user();
    state.favorites.remove(user.as_ref(), &id).await;
    StatusCode::NO_CONTENT
}

/// Shortcut: search a favorite route for today at the default time.
async fn search_from_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TripSearchResponse>, AppError> {
    let user = state.identity.current_user().ok_or(AppError::Unauthorized {
        message: "Sign in to use favorites".to_string(),
    })?;
    let favorite = state
        .favorites
        .get(&user, &id)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("No favorite {id}"),
        })?;

    let params = shortcut_params(favorite.from_station, favorite.to_station);
    run_shortcut_search(&state, params).await
}

/// The user's search history; empty when signed out.
async fn list_history(State(state): State<AppState>) -> Json<Vec<HistoryResult>> {
    let user = state.identity.current_user();
    let history = state
        .history
        .list(user.as_ref())
        .await
        .iter()
        .map(HistoryResult::from_item)
        .collect();
    Json(history)
}

/// Delete the user's entire search history.
async fn clear_history(State(state): State<AppState>) -> StatusCode {
    let user = state.identity.current_user();
    state.history.clear(user.as_ref()).await;
    StatusCode::NO_CONTENT
}

/// Shortcut: repeat a past search for today at the default time.
async fn repeat_search(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TripSearchResponse>, AppError> {
    let user = state.identity.current_user().ok_or(AppError::Unauthorized {
        message: "Sign in to repeat searches".to_string(),
    })?;
    let item = state
        .history
        .get(&user, &id)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("No history entry {id}"),
        })?;

    let params = shortcut_params(item.from_station, item.to_station);
    run_shortcut_search(&state, params).await
}

/// Run a search synthesized by a shortcut entry point.
async fn run_shortcut_search(
    state: &AppState,
    params: SearchParams,
) -> Result<Json<TripSearchResponse>, AppError> {
    let user = state.identity.current_user();
    let trips = state.session.search(&params, user.as_ref()).await?;
    let sort = state.session.results().await.sort;

    Ok(Json(TripSearchResponse {
        sort: sort.as_str().to_string(),
        trips: trips.iter().map(TripResult::from_trip).collect(),
    }))
}

/// Drain pending toast notifications.
async fn drain_notifications(
    State(state): State<AppState>,
) -> Json<Vec<crate::session::Notification>> {
    Json(state.drain_notifications().await)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::MissingStations => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials | AuthError::NotSignedIn => AppError::Unauthorized {
                message: e.to_string(),
            },
            AuthError::EmailTaken | AuthError::InvalidInput { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
