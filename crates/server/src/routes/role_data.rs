use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use serde_json::{Map, Value};
use utils::response::ApiResponse;

use services::services::role_data;

use crate::{AppState, error::ApiError};

/// All tables relevant to a role, keyed by table name.
pub async fn get_role_data(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<ResponseJson<ApiResponse<Map<String, Value>>>, ApiError> {
    let data = role_data::fetch_role_data(&state.db().pool, &role).await?;
    Ok(ResponseJson(ApiResponse::success(data)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/roles/{role}/data", get(get_role_data))
}
