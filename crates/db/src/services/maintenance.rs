use serde::Serialize;
use sqlx::SqlitePool;

use crate::schema::TableName;

/// Database housekeeping used by the `db_maintenance` CLI.
pub struct MaintenanceService;

#[derive(Debug, Serialize)]
pub struct TableCount {
    pub table: TableName,
    pub rows: i64,
}

/// Deletion order honouring foreign keys: dependents first, then the
/// tables they reference.
const CLEAR_ORDER: [TableName; 9] = [
    TableName::DailyTasks,
    TableName::ProgressEntries,
    TableName::SafetyChecklists,
    TableName::SafetyIncidents,
    TableName::Tasks,
    TableName::Equipment,
    TableName::Materials,
    TableName::Workers,
    TableName::Projects,
];

impl MaintenanceService {
    /// Delete every row from every allow-listed table and reset the
    /// autoincrement counters so reseeded data starts from id 1 again.
    pub async fn clear_dynamic_data(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let mut deleted = 0;
        for table in CLEAR_ORDER {
            let result = sqlx::query(&format!("DELETE FROM {table}"))
                .execute(pool)
                .await?;
            deleted += result.rows_affected();
            tracing::debug!(
                "cleared {} rows from {table}",
                result.rows_affected()
            );
        }

        // sqlite_sequence only exists once an AUTOINCREMENT table has been
        // written to, hence the existence check.
        let has_sequence: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
        )
        .fetch_one(pool)
        .await?;
        if has_sequence > 0 {
            sqlx::query("DELETE FROM sqlite_sequence")
                .execute(pool)
                .await?;
        }

        Ok(deleted)
    }

    pub async fn row_counts(pool: &SqlitePool) -> Result<Vec<TableCount>, sqlx::Error> {
        let mut counts = Vec::with_capacity(TableName::ALL.len());
        for table in TableName::ALL {
            let rows: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(pool)
                .await?;
            counts.push(TableCount { table, rows });
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::test_utils::setup_test_pool, services::seed::SeedService};

    #[tokio::test]
    async fn clear_then_reseed_restarts_ids() {
        let pool = setup_test_pool().await;
        SeedService::seed_if_empty(&pool).await.unwrap();

        let deleted = MaintenanceService::clear_dynamic_data(&pool).await.unwrap();
        assert!(deleted > 0);

        for count in MaintenanceService::row_counts(&pool).await.unwrap() {
            assert_eq!(count.rows, 0, "{} not empty", count.table);
        }

        SeedService::seed_if_empty(&pool).await.unwrap();
        let first_id: i64 = sqlx::query_scalar("SELECT MIN(project_id) FROM projects")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(first_id, 1);
    }
}
