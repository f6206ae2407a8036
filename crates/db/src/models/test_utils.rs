use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::project::{CreateProject, Project};

pub(crate) async fn setup_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("invalid sqlite config")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open sqlite memory db");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    pool
}

pub(crate) async fn sample_project(pool: &SqlitePool) -> Project {
    Project::create(
        pool,
        &CreateProject {
            name: "Harbor Bridge Renovation".into(),
            location: "Waterfront".into(),
            start_date: NaiveDate::from_ymd_opt(2023, 5, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 10).unwrap(),
            budget: 12_500_000.0,
            status: "In Progress".into(),
            client: "State Highway Department".into(),
            description: None,
        },
    )
    .await
    .expect("failed to insert sample project")
}
