use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use db::DBService;
use serde_json::{Value, json};
use server::{AppState, routes};
use services::services::dashboard::DashboardConfig;
use tempfile::TempDir;
use tower::ServiceExt;

/// Each test gets its own file-backed database. The `TempDir` must stay
/// alive for the duration of the test or the file disappears.
async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let url = format!("sqlite://{}/test.sqlite", dir.path().to_string_lossy());
    let db = DBService::new_with_url(&url)
        .await
        .expect("failed to open test database");
    (routes::router(AppState::new(db, DashboardConfig::new())), dir)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn dashboard_config_defaults_to_project_manager_balanced() {
    let (app, _dir) = test_app().await;
    let (status, body) = post_json(&app, "/api/dashboard/config", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "project_manager");
    assert_eq!(body["visualization_preference"], "balanced");

    let tiles = body["tile_configuration"].as_array().unwrap();
    assert!(!tiles.is_empty());
    let priorities: Vec<i64> = tiles
        .iter()
        .map(|t| t["priority"].as_i64().unwrap())
        .collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
}

#[tokio::test]
async fn dashboard_config_normalizes_role_and_applies_formats() {
    let (app, _dir) = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/dashboard/config",
        json!({"role": "Site Supervisor", "visualization_preference": "technical"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "site_supervisor");

    let tiles = body["tile_configuration"].as_array().unwrap();
    assert_eq!(tiles[0]["tile_id"], "task_progress");
    assert_eq!(tiles[0]["priority"], 1);
    assert_eq!(tiles[0]["visualization_format"], "detailed_table");
}

#[tokio::test]
async fn unknown_table_is_a_bad_request() {
    let (app, _dir) = test_app().await;
    let (status, body) = get_json(&app, "/api/tables/secrets").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn project_crud_over_http() {
    let (app, _dir) = test_app().await;

    let (status, created) = post_json(
        &app,
        "/api/projects",
        json!({
            "name": "Community Health Center",
            "location": "East District",
            "start_date": "2023-07-01",
            "end_date": "2024-04-30",
            "budget": 4200000.0,
            "status": "In Progress",
            "client": "Regional Health Authority",
            "description": null
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["data"]["project_id"].as_i64().unwrap();

    let (status, fetched) = get_json(&app, &format!("/api/projects/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["name"], "Community Health Center");

    let (status, _) = get_json(&app, "/api/projects/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, filtered) = get_json(&app, "/api/projects?status=In%20Progress").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn role_data_returns_tables_for_role() {
    let (app, _dir) = test_app().await;
    let (status, body) = get_json(&app, "/api/roles/inventory_manager/data").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_object().unwrap();
    assert!(data.contains_key("materials"));
    assert!(data.contains_key("equipment"));
    assert_eq!(data.len(), 2);
}
