use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressEntryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub progress_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub milestone: String,
    pub percent_complete: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProgressEntry {
    pub project_id: i64,
    pub date: NaiveDate,
    pub milestone: String,
    pub percent_complete: f64,
    pub notes: Option<String>,
}

const COLUMNS: &str = "progress_id, project_id, date, milestone, percent_complete, notes";

impl ProgressEntry {
    pub async fn find_all(
        pool: &SqlitePool,
        project_id: Option<i64>,
    ) -> Result<Vec<ProgressEntry>, ProgressEntryError> {
        let rows = match project_id {
            Some(project_id) => {
                sqlx::query_as::<_, ProgressEntry>(&format!(
                    "SELECT {COLUMNS} FROM progress_entries WHERE project_id = ? ORDER BY date DESC"
                ))
                .bind(project_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProgressEntry>(&format!(
                    "SELECT {COLUMNS} FROM progress_entries ORDER BY date DESC"
                ))
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateProgressEntry,
    ) -> Result<ProgressEntry, ProgressEntryError> {
        let entry = sqlx::query_as::<_, ProgressEntry>(&format!(
            r#"INSERT INTO progress_entries (project_id, date, milestone, percent_complete, notes)
               VALUES (?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(data.project_id)
        .bind(data.date)
        .bind(&data.milestone)
        .bind(data.percent_complete)
        .bind(&data.notes)
        .fetch_one(pool)
        .await?;
        Ok(entry)
    }
}
