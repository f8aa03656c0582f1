use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use anyhow::Context;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use db::{MoodStore, PgMoodStore};

#[derive(Clone)]
pub struct AppState {
    pub moods: Arc<dyn MoodStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = ?e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Storage must be ready before any route is served.
    let store = match connect_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = ?e, "Error connecting to database");
            std::process::exit(1);
        }
    };

    let state = AppState {
        moods: Arc::new(store),
    };
    let app = build_router(state, cors_layer(&config));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn connect_store(config: &Config) -> anyhow::Result<PgMoodStore> {
    let pool = db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("failed to create database pool")?;
    tracing::info!("Database connected");

    db::run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(PgMoodStore::new(pool))
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/api/moods",
            get(handlers::moods::list_moods).post(handlers::moods::create_mood),
        )
        .route(
            "/api/moods/:id",
            get(handlers::moods::get_mood)
                .put(handlers::moods::update_mood)
                .delete(handlers::moods::delete_mood),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
