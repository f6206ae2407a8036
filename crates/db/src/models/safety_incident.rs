use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafetyIncidentError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Safety incident not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SafetyIncident {
    pub incident_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub incident_type: String,
    pub description: String,
    pub severity: String,
    pub resolved: bool,
    pub action_taken: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSafetyIncident {
    pub project_id: i64,
    pub date: NaiveDate,
    pub incident_type: String,
    pub description: String,
    pub severity: String,
    pub resolved: bool,
    pub action_taken: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSafetyIncident {
    pub date: Option<NaiveDate>,
    pub incident_type: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub resolved: Option<bool>,
    pub action_taken: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SafetyIncidentFilter {
    pub project_id: Option<i64>,
    pub incident_type: Option<String>,
    pub severity: Option<String>,
    pub resolved: Option<bool>,
}

const COLUMNS: &str =
    "incident_id, project_id, date, incident_type, description, severity, resolved, action_taken";

impl SafetyIncident {
    pub async fn find_all(
        pool: &SqlitePool,
        filter: &SafetyIncidentFilter,
    ) -> Result<Vec<SafetyIncident>, SafetyIncidentError> {
        let mut sql = format!("SELECT {COLUMNS} FROM safety_incidents");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.project_id.is_some() {
            clauses.push("project_id = ?");
        }
        if filter.incident_type.is_some() {
            clauses.push("incident_type = ?");
        }
        if filter.severity.is_some() {
            clauses.push("severity = ?");
        }
        if filter.resolved.is_some() {
            clauses.push("resolved = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY date DESC");

        let mut query = sqlx::query_as::<_, SafetyIncident>(&sql);
        if let Some(project_id) = filter.project_id {
            query = query.bind(project_id);
        }
        if let Some(incident_type) = &filter.incident_type {
            query = query.bind(incident_type);
        }
        if let Some(severity) = &filter.severity {
            query = query.bind(severity);
        }
        if let Some(resolved) = filter.resolved {
            query = query.bind(resolved);
        }

        Ok(query.fetch_all(pool).await?)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<SafetyIncident>, SafetyIncidentError> {
        let incident = sqlx::query_as::<_, SafetyIncident>(&format!(
            "SELECT {COLUMNS} FROM safety_incidents WHERE incident_id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(incident)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateSafetyIncident,
    ) -> Result<SafetyIncident, SafetyIncidentError> {
        let incident = sqlx::query_as::<_, SafetyIncident>(&format!(
            r#"INSERT INTO safety_incidents (project_id, date, incident_type, description, severity, resolved, action_taken)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(data.project_id)
        .bind(data.date)
        .bind(&data.incident_type)
        .bind(&data.description)
        .bind(&data.severity)
        .bind(data.resolved)
        .bind(&data.action_taken)
        .fetch_one(pool)
        .await?;
        Ok(incident)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateSafetyIncident,
    ) -> Result<SafetyIncident, SafetyIncidentError> {
        let incident = sqlx::query_as::<_, SafetyIncident>(&format!(
            r#"UPDATE safety_incidents SET
                 date          = COALESCE(?, date),
                 incident_type = COALESCE(?, incident_type),
                 description   = COALESCE(?, description),
                 severity      = COALESCE(?, severity),
                 resolved      = COALESCE(?, resolved),
                 action_taken  = COALESCE(?, action_taken)
               WHERE incident_id = ?
               RETURNING {COLUMNS}"#
        ))
        .bind(data.date)
        .bind(&data.incident_type)
        .bind(&data.description)
        .bind(&data.severity)
        .bind(data.resolved)
        .bind(&data.action_taken)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(SafetyIncidentError::NotFound)?;
        Ok(incident)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, SafetyIncidentError> {
        let result = sqlx::query("DELETE FROM safety_incidents WHERE incident_id = ?")
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

    #[tokio::test]
    async fn resolved_filter_binds_a_boolean() {
        let pool = setup_test_pool().await;
        let project = sample_project(&pool).await;

        for (resolved, severity) in [(true, "Low"), (false, "High")] {
            SafetyIncident::create(
                &pool,
                &CreateSafetyIncident {
                    project_id: project.project_id,
                    date: NaiveDate::from_ymd_opt(2023, 4, 12).unwrap(),
                    incident_type: "Minor Injury".into(),
                    description: "Worker sustained minor cut on hand".into(),
                    severity: severity.into(),
                    resolved,
                    action_taken: None,
                },
            )
            .await
            .unwrap();
        }

        let open = SafetyIncident::find_all(
            &pool,
            &SafetyIncidentFilter {
                resolved: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].severity, "High");
    }
}
