use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use serde_json::{Map, Value};
use utils::response::ApiResponse;

use db::schema::{self, ColumnInfo, TableName};

use crate::{AppState, error::ApiError};

pub async fn list_tables(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<String>>>, ApiError> {
    let tables = schema::list_tables(&state.db().pool).await?;
    Ok(ResponseJson(ApiResponse::success(tables)))
}

pub async fn get_table_rows(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<Map<String, Value>>>>, ApiError> {
    let table: TableName = table.parse()?;
    let rows = schema::fetch_table_rows(&state.db().pool, table).await?;
    Ok(ResponseJson(ApiResponse::success(rows)))
}

pub async fn get_table_columns(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<ResponseJson<ApiResponse<Vec<ColumnInfo>>>, ApiError> {
    let table: TableName = table.parse()?;
    let columns = schema::table_columns(&state.db().pool, table).await?;
    Ok(ResponseJson(ApiResponse::success(columns)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tables", get(list_tables))
        .route("/tables/{table}", get(get_table_rows))
        .route("/tables/{table}/columns", get(get_table_columns))
}
