use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{
    models::{
        daily_task::DailyTaskError, equipment::EquipmentError, material::MaterialError,
        progress_entry::ProgressEntryError, project::ProjectError,
        safety_checklist::SafetyChecklistError, safety_incident::SafetyIncidentError,
        task::TaskError, worker::WorkerError,
    },
    schema::SchemaError,
};
use services::services::role_data::RoleDataError;
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Worker(#[from] WorkerError),
    #[error(transparent)]
    Material(#[from] MaterialError),
    #[error(transparent)]
    SafetyIncident(#[from] SafetyIncidentError),
    #[error(transparent)]
    Equipment(#[from] EquipmentError),
    #[error(transparent)]
    SafetyChecklist(#[from] SafetyChecklistError),
    #[error(transparent)]
    DailyTask(#[from] DailyTaskError),
    #[error(transparent)]
    ProgressEntry(#[from] ProgressEntryError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl From<RoleDataError> for ApiError {
    fn from(err: RoleDataError) -> Self {
        match err {
            RoleDataError::Schema(e) => ApiError::Schema(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Project(ProjectError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Task(TaskError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Worker(WorkerError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Material(MaterialError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::SafetyIncident(SafetyIncidentError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Equipment(EquipmentError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Schema(SchemaError::UnknownTable(_)) => StatusCode::BAD_REQUEST,
            ApiError::Project(_)
            | ApiError::Task(_)
            | ApiError::Worker(_)
            | ApiError::Material(_)
            | ApiError::SafetyIncident(_)
            | ApiError::Equipment(_)
            | ApiError::SafetyChecklist(_)
            | ApiError::DailyTask(_)
            | ApiError::ProgressEntry(_)
            | ApiError::Schema(_)
            | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let response = ApiResponse::<()>::error(&self.to_string());
        (status_code, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::Project(ProjectError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_table_maps_to_400() {
        let response =
            ApiError::Schema(SchemaError::UnknownTable("users".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
