use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::safety_incident::{
    CreateSafetyIncident, SafetyIncident, SafetyIncidentError, SafetyIncidentFilter,
    UpdateSafetyIncident,
};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn get_safety_incidents(
    State(state): State<AppState>,
    Query(filter): Query<SafetyIncidentFilter>,
) -> Result<ResponseJson<ApiResponse<Vec<SafetyIncident>>>, ApiError> {
    let incidents = SafetyIncident::find_all(&state.db().pool, &filter).await?;
    Ok(ResponseJson(ApiResponse::success(incidents)))
}

pub async fn get_safety_incident(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<SafetyIncident>>, ApiError> {
    let incident = SafetyIncident::find_by_id(&state.db().pool, id)
        .await?
        .ok_or(SafetyIncidentError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(incident)))
}

pub async fn create_safety_incident(
    State(state): State<AppState>,
    Json(payload): Json<CreateSafetyIncident>,
) -> Result<ResponseJson<ApiResponse<SafetyIncident>>, ApiError> {
    let incident = SafetyIncident::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(incident)))
}

pub async fn update_safety_incident(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSafetyIncident>,
) -> Result<ResponseJson<ApiResponse<SafetyIncident>>, ApiError> {
    let incident = SafetyIncident::update(&state.db().pool, id, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(incident)))
}

pub async fn delete_safety_incident(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = SafetyIncident::delete(&state.db().pool, id).await?;
    if deleted == 0 {
        return Err(SafetyIncidentError::NotFound.into());
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/safety-incidents",
            get(get_safety_incidents).post(create_safety_incident),
        )
        .route(
            "/safety-incidents/{id}",
            get(get_safety_incident)
                .put(update_safety_incident)
                .delete(delete_safety_incident),
        )
}
