use db::{DBService, services::seed::SeedService};
use server::{AppState, routes};
use services::services::dashboard::DashboardConfig;
use sqlx::Error as SqlxError;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};
use utils::assets::asset_dir;

#[derive(Debug, Error)]
pub enum SiteDashError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sqlx(#[from] SqlxError),
}

#[tokio::main]
async fn main() -> Result<(), SiteDashError> {
    // Load environment variables from `.env` if present so local
    // development picks up database and port overrides.
    dotenv::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},services={level},db={level},utils={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string).expect("Failed to create tracing filter");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    if !asset_dir().exists() {
        std::fs::create_dir_all(asset_dir())?;
    }

    let db = match std::env::var("DATABASE_URL") {
        Ok(url) => DBService::new_with_url(&url).await?,
        Err(_) => DBService::new().await?,
    };

    // Demo backend: make sure there is something to look at on first run.
    // A failed seed is not fatal.
    match SeedService::seed_if_empty(&db.pool).await {
        Ok(true) => tracing::info!("database seeded with sample data"),
        Ok(false) => {}
        Err(e) => tracing::warn!("failed to seed sample data: {}", e),
    }

    let state = AppState::new(db, DashboardConfig::new());
    let app_router = routes::router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(8911);
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    let actual_port = listener.local_addr()?.port();
    tracing::info!("Server running on http://{host}:{actual_port}");

    axum::serve(listener, app_router).await?;
    Ok(())
}
