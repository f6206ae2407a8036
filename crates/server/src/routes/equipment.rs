use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::equipment::{
    CreateEquipment, Equipment, EquipmentError, EquipmentFilter, UpdateEquipment,
};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn get_equipment_list(
    State(state): State<AppState>,
    Query(filter): Query<EquipmentFilter>,
) -> Result<ResponseJson<ApiResponse<Vec<Equipment>>>, ApiError> {
    let equipment = Equipment::find_all(&state.db().pool, &filter).await?;
    Ok(ResponseJson(ApiResponse::success(equipment)))
}

pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Equipment>>, ApiError> {
    let equipment = Equipment::find_by_id(&state.db().pool, id)
        .await?
        .ok_or(EquipmentError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(equipment)))
}

pub async fn create_equipment(
    State(state): State<AppState>,
    Json(payload): Json<CreateEquipment>,
) -> Result<ResponseJson<ApiResponse<Equipment>>, ApiError> {
    let equipment = Equipment::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(equipment)))
}

pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEquipment>,
) -> Result<ResponseJson<ApiResponse<Equipment>>, ApiError> {
    let equipment = Equipment::update(&state.db().pool, id, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(equipment)))
}

pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = Equipment::delete(&state.db().pool, id).await?;
    if deleted == 0 {
        return Err(EquipmentError::NotFound.into());
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/equipment",
            get(get_equipment_list).post(create_equipment),
        )
        .route(
            "/equipment/{id}",
            get(get_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
}
