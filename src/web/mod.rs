use crate::domain::GameCatalog;
use crate::services::AnalysisService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;

pub struct AppState {
    pub analysis: Arc<AnalysisService>,
    pub catalog: GameCatalog,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/analyze/{game_name}", get(handlers::analyze_game))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
