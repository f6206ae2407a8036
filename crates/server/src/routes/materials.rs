use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::material::{
    CreateMaterial, Material, MaterialError, MaterialFilter, UpdateMaterial,
};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn get_materials(
    State(state): State<AppState>,
    Query(filter): Query<MaterialFilter>,
) -> Result<ResponseJson<ApiResponse<Vec<Material>>>, ApiError> {
    let materials = Material::find_all(&state.db().pool, &filter).await?;
    Ok(ResponseJson(ApiResponse::success(materials)))
}

pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Material>>, ApiError> {
    let material = Material::find_by_id(&state.db().pool, id)
        .await?
        .ok_or(MaterialError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(material)))
}

pub async fn create_material(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaterial>,
) -> Result<ResponseJson<ApiResponse<Material>>, ApiError> {
    let material = Material::create(&state.db().pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(material)))
}

pub async fn update_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMaterial>,
) -> Result<ResponseJson<ApiResponse<Material>>, ApiError> {
    let material = Material::update(&state.db().pool, id, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(material)))
}

pub async fn delete_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = Material::delete(&state.db().pool, id).await?;
    if deleted == 0 {
        return Err(MaterialError::NotFound.into());
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/materials", get(get_materials).post(create_material))
        .route(
            "/materials/{id}",
            get(get_material)
                .put(update_material)
                .delete(delete_material),
        )
}
