use axum::{
    Json, Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::safety_checklist::{CreateSafetyChecklist, SafetyChecklist};
use serde::Deserialize;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct ChecklistQuery {
    pub project_id: Option<i64>,
}

pub async fn get_safety_checklists(
    State(state): State<AppState>,
    Query(query): Query<ChecklistQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<SafetyChecklist>>>, ApiError> {
    let checklists = SafetyChecklist::find_all(&state.db().pool, query.project_id).await?;
    Ok(ResponseJson(ApiResponse::success(checklists)))
}

pub async fn create_safety_checklist(
    State(state): State<AppState>,
    Json(payload): Json<CreateSafetyChecklist>,
) -> Result<ResponseJson<ApiResponse<SafetyChecklist>>, ApiError> {
    let checklist = SafetyChecklist::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(checklist)))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/safety-checklists",
        get(get_safety_checklists).post(create_safety_checklist),
    )
}
