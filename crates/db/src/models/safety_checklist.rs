use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafetyChecklistError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SafetyChecklist {
    pub checklist_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub inspector: String,
    pub ppe_compliance: bool,
    pub hazard_signage: bool,
    pub equipment_safety: bool,
    pub fire_safety: bool,
    pub first_aid: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSafetyChecklist {
    pub project_id: i64,
    pub date: NaiveDate,
    pub inspector: String,
    pub ppe_compliance: bool,
    pub hazard_signage: bool,
    pub equipment_safety: bool,
    pub fire_safety: bool,
    pub first_aid: bool,
    pub notes: Option<String>,
}

const COLUMNS: &str = "checklist_id, project_id, date, inspector, ppe_compliance, hazard_signage, equipment_safety, fire_safety, first_aid, notes";

impl SafetyChecklist {
    pub async fn find_all(
        pool: &SqlitePool,
        project_id: Option<i64>,
    ) -> Result<Vec<SafetyChecklist>, SafetyChecklistError> {
        let rows = match project_id {
            Some(project_id) => {
                sqlx::query_as::<_, SafetyChecklist>(&format!(
                    "SELECT {COLUMNS} FROM safety_checklists WHERE project_id = ? ORDER BY date DESC"
                ))
                .bind(project_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SafetyChecklist>(&format!(
                    "SELECT {COLUMNS} FROM safety_checklists ORDER BY date DESC"
                ))
                .fetch_all(pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateSafetyChecklist,
    ) -> Result<SafetyChecklist, SafetyChecklistError> {
        let checklist = sqlx::query_as::<_, SafetyChecklist>(&format!(
            r#"INSERT INTO safety_checklists (project_id, date, inspector, ppe_compliance, hazard_signage, equipment_safety, fire_safety, first_aid, notes)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(data.project_id)
        .bind(data.date)
        .bind(&data.inspector)
        .bind(data.ppe_compliance)
        .bind(data.hazard_signage)
        .bind(data.equipment_safety)
        .bind(data.fire_safety)
        .bind(data.first_aid)
        .bind(&data.notes)
        .fetch_one(pool)
        .await?;
        Ok(checklist)
    }
}
