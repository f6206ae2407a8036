use std::sync::Arc;

use db::DBService;
use services::services::dashboard::DashboardConfig;

pub mod error;
pub mod routes;

/// Shared request state: the database handle plus the immutable dashboard
/// configuration built at startup.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
    dashboard_config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(db: DBService, dashboard_config: DashboardConfig) -> Self {
        Self {
            db,
            dashboard_config: Arc::new(dashboard_config),
        }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }

    pub fn dashboard_config(&self) -> &DashboardConfig {
        &self.dashboard_config
    }
}
