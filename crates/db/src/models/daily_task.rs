use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DailyTaskError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DailyTask {
    pub daily_task_id: i64,
    pub project_id: i64,
    pub worker_id: i64,
    pub date: NaiveDate,
    pub task_description: String,
    pub hours_worked: f64,
    pub completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDailyTask {
    pub project_id: i64,
    pub worker_id: i64,
    pub date: NaiveDate,
    pub task_description: String,
    pub hours_worked: f64,
    pub completed: bool,
    pub notes: Option<String>,
}

const COLUMNS: &str =
    "daily_task_id, project_id, worker_id, date, task_description, hours_worked, completed, notes";

impl DailyTask {
    pub async fn find_all(
        pool: &SqlitePool,
        completed: Option<bool>,
    ) -> Result<Vec<DailyTask>, DailyTaskError> {
        let rows = match completed {
            Some(completed) => {
                sqlx::query_as::<_, DailyTask>(&format!(
                    "SELECT {COLUMNS} FROM daily_tasks WHERE completed = ? ORDER BY date DESC"
                ))
                .bind(completed)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DailyTask>(&format!(
                    "SELECT {COLUMNS} FROM daily_tasks ORDER BY date DESC"
                ))
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateDailyTask,
    ) -> Result<DailyTask, DailyTaskError> {
        let task = sqlx::query_as::<_, DailyTask>(&format!(
            r#"INSERT INTO daily_tasks (project_id, worker_id, date, task_description, hours_worked, completed, notes)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(data.project_id)
        .bind(data.worker_id)
        .bind(data.date)
        .bind(&data.task_description)
        .bind(data.hours_worked)
        .bind(data.completed)
        .bind(&data.notes)
        .fetch_one(pool)
        .await?;
        Ok(task)
    }
}
