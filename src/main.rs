use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::SqlitePool;
use std::net::{Ipv4Addr, SocketAddr};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod db;
mod error;
mod models;
mod routes;


/// Build the router over an injected pool, so tests can drive the exact
/// service the binary runs.
fn app(pool: SqlitePool) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Football Players API is running" }))
        .route("/health", get(routes::health::health_check))

        // Player endpoints
        .route("/list", get(routes::players::list_players))
        .route("/list/{start}/{end}", get(routes::players::list_players_by_date))
        .route("/add", post(routes::players::add_player))
        .route("/update", put(routes::players::update_player))
        .route("/delete", delete(routes::players::delete_player))

        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    // Create database connection pool
    let db_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in .env");

    let pool = SqlitePool::connect(&db_url)
        .await
        .expect("Failed to connect to database");

    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database connection established.");

    let host: Ipv4Addr = std::env::var("HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string())
        .parse()
        .expect("HOST is not in the correct format");

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3021".to_string())
        .parse()
        .expect("PORT is not the correct format");

    let addr = SocketAddr::from((host, port));

    let app = app(pool);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
