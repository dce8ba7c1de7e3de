use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use fahrplan_server::session::SessionConfig;
use fahrplan_server::stations::StationDirectory;
use fahrplan_server::trips::GeneratorConfig;
use fahrplan_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Static front-end directory, overridable for packaging.
    let static_dir =
        std::env::var("FAHRPLAN_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    // Build the station directory once; it is immutable for the process lifetime.
    let directory = StationDirectory::new();
    tracing::info!(stations = directory.len(), "loaded station directory");

    // Build app state
    let state = AppState::new(directory, GeneratorConfig::default(), SessionConfig::default());

    // Create router
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Fahrplan trip search listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health              - Health check");
    println!("  GET    /api/stations/search - Station autocomplete");
    println!("  POST   /api/trips/search    - Search for trips");
    println!("  GET    /api/trips           - Current results, re-sorted");
    println!("  POST   /api/auth/signup     - Register");
    println!("  POST   /api/auth/signin     - Sign in");
    println!("  POST   /api/auth/signout    - Sign out");
    println!("  GET    /api/favorites       - Favorite routes");
    println!("  GET    /api/history         - Search history");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
