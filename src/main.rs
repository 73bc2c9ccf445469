use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use scoreline_api::api::{self, AppState};
use scoreline_api::domain::repositories::{GoalStore, TeamStore};
use scoreline_api::infrastructure::repositories::{MemoryDb, MemoryGoalStore, MemoryTeamStore};
use scoreline_api::infrastructure::seed;
use scoreline_api::services::{ConsistencyManager, LastGoalResolver, DEFAULT_STORE_TIMEOUT};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| {
            tracing::warn!("PORT not set, using default");
            3000
        });

    let op_timeout = std::env::var("STORE_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_STORE_TIMEOUT);

    // Open the store and build the service layer
    let db = MemoryDb::new();
    let teams: Arc<dyn TeamStore> = Arc::new(MemoryTeamStore::new(db.clone()));
    let goals: Arc<dyn GoalStore> = Arc::new(MemoryGoalStore::new(db));

    let seed_file =
        std::env::var("SEED_FILE").unwrap_or_else(|_| "data/teams.json".to_string());
    match seed::load_teams(teams.as_ref(), &seed_file).await {
        Ok(count) => tracing::info!("Loaded {} teams from {}", count, seed_file),
        Err(e) => tracing::warn!("Starting with an empty team collection: {}", e),
    }

    let manager = Arc::new(ConsistencyManager::new(
        teams.clone(),
        goals.clone(),
        op_timeout,
    ));
    let resolver = Arc::new(LastGoalResolver::new(
        teams.clone(),
        goals.clone(),
        manager.clone(),
        op_timeout,
    ));

    let state = AppState {
        teams,
        goals,
        manager,
        resolver,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::router(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
