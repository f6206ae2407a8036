use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::worker::{CreateWorker, UpdateWorker, Worker, WorkerError, WorkerFilter};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn get_workers(
    State(state): State<AppState>,
    Query(filter): Query<WorkerFilter>,
) -> Result<ResponseJson<ApiResponse<Vec<Worker>>>, ApiError> {
    let workers = Worker::find_all(&state.db().pool, &filter).await?;
    Ok(ResponseJson(ApiResponse::success(workers)))
}

pub async fn get_worker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Worker>>, ApiError> {
    let worker = Worker::find_by_id(&state.db().pool, id)
        .await?
        .ok_or(WorkerError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(worker)))
}

pub async fn create_worker(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorker>,
) -> Result<ResponseJson<ApiResponse<Worker>>, ApiError> {
    let worker = Worker::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(worker)))
}

pub async fn update_worker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateWorker>,
) -> Result<ResponseJson<ApiResponse<Worker>>, ApiError> {
    let worker = Worker::update(&state.db().pool, id, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(worker)))
}

pub async fn delete_worker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = Worker::delete(&state.db().pool, id).await?;
    if deleted == 0 {
        return Err(WorkerError::NotFound.into());
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workers", get(get_workers).post(create_worker))
        .route(
            "/workers/{id}",
            get(get_worker).put(update_worker).delete(delete_worker),
        )
}
