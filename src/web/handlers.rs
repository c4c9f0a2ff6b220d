use crate::domain::GameAnalysisResponse;
use crate::web::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /analyze/{game_name}
pub async fn analyze_game(
    State(state): State<Arc<AppState>>,
    Path(game_name): Path<String>,
) -> Result<Json<GameAnalysisResponse>, AppError> {
    let game = state
        .catalog
        .lookup(&game_name)
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    let analysis = state
        .analysis
        .analyze(&game)
        .await?
        .ok_or_else(|| AppError::NotFound("No articles found".to_string()))?;

    Ok(Json(GameAnalysisResponse::new(game, analysis)))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
