use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Worker not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Worker {
    pub worker_id: i64,
    pub name: String,
    pub role: String,
    pub contact: String,
    pub certification: Option<String>,
    pub availability: String,
    pub hourly_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateWorker {
    pub name: String,
    pub role: String,
    pub contact: String,
    pub certification: Option<String>,
    pub availability: String,
    pub hourly_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorker {
    pub name: Option<String>,
    pub role: Option<String>,
    pub contact: Option<String>,
    pub certification: Option<String>,
    pub availability: Option<String>,
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkerFilter {
    pub role: Option<String>,
    pub availability: Option<String>,
}

const COLUMNS: &str = "worker_id, name, role, contact, certification, availability, hourly_rate";

impl Worker {
    pub async fn find_all(
        pool: &SqlitePool,
        filter: &WorkerFilter,
    ) -> Result<Vec<Worker>, WorkerError> {
        let mut sql = format!("SELECT {COLUMNS} FROM workers");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.role.is_some() {
            clauses.push("role = ?");
        }
        if filter.availability.is_some() {
            clauses.push("availability = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY name");

        let mut query = sqlx::query_as::<_, Worker>(&sql);
        if let Some(role) = &filter.role {
            query = query.bind(role);
        }
        if let Some(availability) = &filter.availability {
            query = query.bind(availability);
        }

        Ok(query.fetch_all(pool).await?)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Worker>, WorkerError> {
        let worker = sqlx::query_as::<_, Worker>(&format!(
            "SELECT {COLUMNS} FROM workers WHERE worker_id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(worker)
    }

    pub async fn create(pool: &SqlitePool, data: &CreateWorker) -> Result<Worker, WorkerError> {
        let worker = sqlx::query_as::<_, Worker>(&format!(
            r#"INSERT INTO workers (name, role, contact, certification, availability, hourly_rate)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.role)
        .bind(&data.contact)
        .bind(&data.certification)
        .bind(&data.availability)
        .bind(data.hourly_rate)
        .fetch_one(pool)
        .await?;
        Ok(worker)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateWorker,
    ) -> Result<Worker, WorkerError> {
        let worker = sqlx::query_as::<_, Worker>(&format!(
            r#"UPDATE workers SET
                 name          = COALESCE(?, name),
                 role          = COALESCE(?, role),
                 contact       = COALESCE(?, contact),
                 certification = COALESCE(?, certification),
                 availability  = COALESCE(?, availability),
                 hourly_rate   = COALESCE(?, hourly_rate)
               WHERE worker_id = ?
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.role)
        .bind(&data.contact)
        .bind(&data.certification)
        .bind(&data.availability)
        .bind(data.hourly_rate)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(WorkerError::NotFound)?;
        Ok(worker)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, WorkerError> {
        let result = sqlx::query("DELETE FROM workers WHERE worker_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_utils::setup_test_pool;

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let pool = setup_test_pool().await;
        for name in ["Sarah Johnson", "John Smith", "Lisa Chen"] {
            Worker::create(
                &pool,
                &CreateWorker {
                    name: name.into(),
                    role: "Engineer".into(),
                    contact: "x@example.com".into(),
                    certification: None,
                    availability: "Full-time".into(),
                    hourly_rate: 38.5,
                },
            )
            .await
            .unwrap();
        }

        let rows = Worker::find_all(&pool, &WorkerFilter::default())
            .await
            .unwrap();
        let names: Vec<_> = rows.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Lisa Chen", "Sarah Johnson"]);
    }
}
