use axum::{
    Json, Router,
    extract::State,
    response::Json as ResponseJson,
    routing::post,
};
use serde::Deserialize;
use services::services::dashboard::{DEFAULT_PREFERENCE, DEFAULT_ROLE, DashboardLayout};

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardConfigRequest {
    pub role: Option<String>,
    pub visualization_preference: Option<String>,
}

/// Role-aware dashboard layout. Total by design: missing or unknown role
/// and preference fall back to defaults, so this never errors.
pub async fn dashboard_config(
    State(state): State<AppState>,
    Json(payload): Json<DashboardConfigRequest>,
) -> ResponseJson<DashboardLayout> {
    let role = payload.role.as_deref().unwrap_or(DEFAULT_ROLE);
    let preference = payload
        .visualization_preference
        .as_deref()
        .unwrap_or(DEFAULT_PREFERENCE);

    ResponseJson(state.dashboard_config().resolve(role, preference))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard/config", post(dashboard_config))
}
