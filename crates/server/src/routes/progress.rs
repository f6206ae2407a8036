use axum::{
    Json, Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::progress_entry::{CreateProgressEntry, ProgressEntry};
use serde::Deserialize;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct ProgressQuery {
    pub project_id: Option<i64>,
}

pub async fn get_progress_entries(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<ProgressEntry>>>, ApiError> {
    let entries = ProgressEntry::find_all(&state.db().pool, query.project_id).await?;
    Ok(ResponseJson(ApiResponse::success(entries)))
}

pub async fn create_progress_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateProgressEntry>,
) -> Result<ResponseJson<ApiResponse<ProgressEntry>>, ApiError> {
    let entry = ProgressEntry::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(entry)))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/progress",
        get(get_progress_entries).post(create_progress_entry),
    )
}
