use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::AssessmentResultRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ResultListResponse {
    pub results: Vec<AssessmentResultRow>,
}

/// GET /api/v1/results
pub async fn handle_list_results(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResultListResponse>, AppError> {
    let results = state.results.list_for_user(params.user_id).await?;
    Ok(Json(ResultListResponse { results }))
}

/// GET /api/v1/results/:id
pub async fn handle_get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentResultRow>, AppError> {
    state
        .results
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Result {id} not found")))
}
