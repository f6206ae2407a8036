use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Task not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaskFilter {
    pub project_id: Option<i64>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

const COLUMNS: &str =
    "task_id, project_id, name, description, start_date, end_date, status, priority";

impl Task {
    pub async fn find_all(pool: &SqlitePool, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        let mut sql = format!("SELECT {COLUMNS} FROM tasks");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.project_id.is_some() {
            clauses.push("project_id = ?");
        }
        if filter.status.is_some() {
            clauses.push("status = ?");
        }
        if filter.priority.is_some() {
            clauses.push("priority = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY task_id");

        let mut query = sqlx::query_as::<_, Task>(&sql);
        if let Some(project_id) = filter.project_id {
            query = query.bind(project_id);
        }
        if let Some(status) = &filter.status {
            query = query.bind(status);
        }
        if let Some(priority) = &filter.priority {
            query = query.bind(priority);
        }

        Ok(query.fetch_all(pool).await?)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Task>, TaskError> {
        let task =
            sqlx::query_as::<_, Task>(&format!("SELECT {COLUMNS} FROM tasks WHERE task_id = ?"))
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(task)
    }

    pub async fn create(pool: &SqlitePool, data: &CreateTask) -> Result<Task, TaskError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"INSERT INTO tasks (project_id, name, description, start_date, end_date, status, priority)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(data.project_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.status)
        .bind(&data.priority)
        .fetch_one(pool)
        .await?;
        Ok(task)
    }

    pub async fn update(pool: &SqlitePool, id: i64, data: &UpdateTask) -> Result<Task, TaskError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"UPDATE tasks SET
                 name        = COALESCE(?, name),
                 description = COALESCE(?, description),
                 start_date  = COALESCE(?, start_date),
                 end_date    = COALESCE(?, end_date),
                 status      = COALESCE(?, status),
                 priority    = COALESCE(?, priority)
               WHERE task_id = ?
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.status)
        .bind(&data.priority)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(TaskError::NotFound)?;
        Ok(task)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE task_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_utils::{sample_project, setup_test_pool};

    fn sample(project_id: i64, status: &str) -> CreateTask {
        CreateTask {
            project_id,
            name: "Foundation Work".into(),
            description: Some("Excavation and foundation pouring".into()),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
            status: status.into(),
            priority: "High".into(),
        }
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let pool = setup_test_pool().await;
        let project = sample_project(&pool).await;
        Task::create(&pool, &sample(project.project_id, "Completed"))
            .await
            .unwrap();
        Task::create(&pool, &sample(project.project_id, "In Progress"))
            .await
            .unwrap();

        let filter = TaskFilter {
            project_id: Some(project.project_id),
            status: Some("Completed".into()),
            priority: Some("High".into()),
        };
        let rows = Task::find_all(&pool, &filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "Completed");
    }

    #[tokio::test]
    async fn update_missing_task_is_not_found() {
        let pool = setup_test_pool().await;
        let err = Task::update(
            &pool,
            999,
            &UpdateTask {
                name: None,
                description: None,
                start_date: None,
                end_date: None,
                status: Some("Done".into()),
                priority: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, TaskError::NotFound));
    }
}
