pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{QuizGenerator, WordStore};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::StatusResponse;
use crate::repository::WordRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<WordRepository>,
}

impl AppState {
    /// State backed by the seed words and the given practice generator.
    pub fn new(quiz: QuizGenerator) -> Self {
        Self::with_store(WordStore::seeded(), quiz)
    }

    pub fn with_store(store: WordStore, quiz: QuizGenerator) -> Self {
        Self {
            repo: Arc::new(WordRepository::new(store, quiz)),
        }
    }
}

/// Build the router with every route and layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // Word routes
        .route("/words", get(routes::words::list).post(routes::words::create))
        // Practice routes
        .route("/practice", get(routes::practice::generate))
        .route("/practice/grade", post(routes::practice::grade))
        .route("/stats", get(routes::stats::summary))
        .fallback(not_found)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    match config.practice_seed {
        Some(seed) => tracing::info!("Practice generator seeded with {}", seed),
        None => tracing::info!("Practice generator seeded from entropy"),
    }
    let state = AppState::new(config.quiz_generator());
    let app = router(state);

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Vocab API is running".to_string(),
    })
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}
