use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::AppState;

pub mod daily_tasks;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod materials;
pub mod progress;
pub mod projects;
pub mod role_data;
pub mod safety_checklists;
pub mod safety_incidents;
pub mod tables;
pub mod tasks;
pub mod workers;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .merge(dashboard::router())
        .merge(tables::router())
        .merge(role_data::router())
        .merge(projects::router())
        .merge(tasks::router())
        .merge(workers::router())
        .merge(materials::router())
        .merge(safety_incidents::router())
        .merge(equipment::router())
        .merge(safety_checklists::router())
        .merge(daily_tasks::router())
        .merge(progress::router())
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
