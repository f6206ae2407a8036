use axum::{
    Json, Router,
    extract::{Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::daily_task::{CreateDailyTask, DailyTask};
use serde::Deserialize;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct DailyTaskQuery {
    pub completed: Option<bool>,
}

pub async fn get_daily_tasks(
    State(state): State<AppState>,
    Query(query): Query<DailyTaskQuery>,
) -> Result<ResponseJson<ApiResponse<Vec<DailyTask>>>, ApiError> {
    let tasks = DailyTask::find_all(&state.db().pool, query.completed).await?;
    Ok(ResponseJson(ApiResponse::success(tasks)))
}

pub async fn create_daily_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateDailyTask>,
) -> Result<ResponseJson<ApiResponse<DailyTask>>, ApiError> {
    let task = DailyTask::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(task)))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/daily-tasks",
        get(get_daily_tasks).post(create_daily_task),
    )
}
