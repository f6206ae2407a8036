use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Project not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub project_id: i64,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub status: String,
    pub client: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub status: String,
    pub client: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub status: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
}

/// Optional equality filters. Each present field contributes one
/// `column = ?` fragment with the value bound as a parameter; column names
/// are fixed here and never taken from request text.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<String>,
    pub location: Option<String>,
    pub client: Option<String>,
}

impl Project {
    pub async fn find_all(
        pool: &SqlitePool,
        filter: &ProjectFilter,
    ) -> Result<Vec<Project>, ProjectError> {
        let mut sql = String::from(
            "SELECT project_id, name, location, start_date, end_date, budget, status, client, description FROM projects",
        );
        let mut clauses: Vec<&str> = Vec::new();
        if filter.status.is_some() {
            clauses.push("status = ?");
        }
        if filter.location.is_some() {
            clauses.push("location = ?");
        }
        if filter.client.is_some() {
            clauses.push("client = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY project_id");

        let mut query = sqlx::query_as::<_, Project>(&sql);
        if let Some(status) = &filter.status {
            query = query.bind(status);
        }
        if let Some(location) = &filter.location {
            query = query.bind(location);
        }
        if let Some(client) = &filter.client {
            query = query.bind(client);
        }

        Ok(query.fetch_all(pool).await?)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Project>, ProjectError> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT project_id, name, location, start_date, end_date, budget, status, client, description FROM projects WHERE project_id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(project)
    }

    pub async fn create(pool: &SqlitePool, data: &CreateProject) -> Result<Project, ProjectError> {
        let project = sqlx::query_as::<_, Project>(
            r#"INSERT INTO projects (name, location, start_date, end_date, budget, status, client, description)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING project_id, name, location, start_date, end_date, budget, status, client, description"#,
        )
        .bind(&data.name)
        .bind(&data.location)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.budget)
        .bind(&data.status)
        .bind(&data.client)
        .bind(&data.description)
        .fetch_one(pool)
        .await?;
        Ok(project)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateProject,
    ) -> Result<Project, ProjectError> {
        let project = sqlx::query_as::<_, Project>(
            r#"UPDATE projects SET
                 name        = COALESCE(?, name),
                 location    = COALESCE(?, location),
                 start_date  = COALESCE(?, start_date),
                 end_date    = COALESCE(?, end_date),
                 budget      = COALESCE(?, budget),
                 status      = COALESCE(?, status),
                 client      = COALESCE(?, client),
                 description = COALESCE(?, description)
               WHERE project_id = ?
               RETURNING project_id, name, location, start_date, end_date, budget, status, client, description"#,
        )
        .bind(&data.name)
        .bind(&data.location)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.budget)
        .bind(&data.status)
        .bind(&data.client)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ProjectError::NotFound)?;
        Ok(project)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, ProjectError> {
        let result = sqlx::query("DELETE FROM projects WHERE project_id = ?")
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

    fn sample() -> CreateProject {
        CreateProject {
            name: "Riverside Towers".into(),
            location: "Downtown".into(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            budget: 5_200_000.0,
            status: "In Progress".into(),
            client: "Riverside Development Corp".into(),
            description: Some("Luxury condominium complex".into()),
        }
    }

    #[tokio::test]
    async fn create_and_fetch_roundtrip() {
        let pool = setup_test_pool().await;
        let created = Project::create(&pool, &sample()).await.unwrap();
        assert_eq!(created.project_id, 1);

        let found = Project::find_by_id(&pool, created.project_id)
            .await
            .unwrap()
            .expect("project should exist");
        assert_eq!(found.name, "Riverside Towers");
        assert_eq!(found.start_date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[tokio::test]
    async fn filter_builds_only_from_present_fields() {
        let pool = setup_test_pool().await;
        Project::create(&pool, &sample()).await.unwrap();
        let mut other = sample();
        other.name = "Metro Transit Hub".into();
        other.status = "Planning".into();
        Project::create(&pool, &other).await.unwrap();

        let filter = ProjectFilter {
            status: Some("Planning".into()),
            ..Default::default()
        };
        let rows = Project::find_all(&pool, &filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Metro Transit Hub");

        let all = Project::find_all(&pool, &ProjectFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let pool = setup_test_pool().await;
        let created = Project::create(&pool, &sample()).await.unwrap();

        let updated = Project::update(
            &pool,
            created.project_id,
            &UpdateProject {
                status: Some("Completed".into()),
                name: None,
                location: None,
                start_date: None,
                end_date: None,
                budget: None,
                client: None,
                description: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.status, "Completed");
        assert_eq!(updated.name, "Riverside Towers");
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let pool = setup_test_pool().await;
        let created = Project::create(&pool, &sample()).await.unwrap();
        assert_eq!(Project::delete(&pool, created.project_id).await.unwrap(), 1);
        assert_eq!(Project::delete(&pool, created.project_id).await.unwrap(), 0);
    }
}
