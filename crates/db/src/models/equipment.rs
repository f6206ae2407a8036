use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EquipmentError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Equipment not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_id: i64,
    pub name: String,
    pub equipment_type: String,
    pub status: String,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
    pub equipment_type: String,
    pub status: String,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub status: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EquipmentFilter {
    pub status: Option<String>,
    pub equipment_type: Option<String>,
}

const COLUMNS: &str =
    "equipment_id, name, equipment_type, status, last_maintenance, next_maintenance, notes";

impl Equipment {
    pub async fn find_all(
        pool: &SqlitePool,
        filter: &EquipmentFilter,
    ) -> Result<Vec<Equipment>, EquipmentError> {
        let mut sql = format!("SELECT {COLUMNS} FROM equipment");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.status.is_some() {
            clauses.push("status = ?");
        }
        if filter.equipment_type.is_some() {
            clauses.push("equipment_type = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY next_maintenance");

        let mut query = sqlx::query_as::<_, Equipment>(&sql);
        if let Some(status) = &filter.status {
            query = query.bind(status);
        }
        if let Some(equipment_type) = &filter.equipment_type {
            query = query.bind(equipment_type);
        }

        Ok(query.fetch_all(pool).await?)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<Equipment>, EquipmentError> {
        let equipment = sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {COLUMNS} FROM equipment WHERE equipment_id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(equipment)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateEquipment,
    ) -> Result<Equipment, EquipmentError> {
        let equipment = sqlx::query_as::<_, Equipment>(&format!(
            r#"INSERT INTO equipment (name, equipment_type, status, last_maintenance, next_maintenance, notes)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.equipment_type)
        .bind(&data.status)
        .bind(data.last_maintenance)
        .bind(data.next_maintenance)
        .bind(&data.notes)
        .fetch_one(pool)
        .await?;
        Ok(equipment)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateEquipment,
    ) -> Result<Equipment, EquipmentError> {
        let equipment = sqlx::query_as::<_, Equipment>(&format!(
            r#"UPDATE equipment SET
                 name             = COALESCE(?, name),
                 equipment_type   = COALESCE(?, equipment_type),
                 status           = COALESCE(?, status),
                 last_maintenance = COALESCE(?, last_maintenance),
                 next_maintenance = COALESCE(?, next_maintenance),
                 notes            = COALESCE(?, notes)
               WHERE equipment_id = ?
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.equipment_type)
        .bind(&data.status)
        .bind(data.last_maintenance)
        .bind(data.next_maintenance)
        .bind(&data.notes)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(EquipmentError::NotFound)?;
        Ok(equipment)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, EquipmentError> {
        let result = sqlx::query("DELETE FROM equipment WHERE equipment_id = ?")
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
    async fn status_filter_narrows_results() {
        let pool = setup_test_pool().await;
        for (name, status) in [
            ("Excavator - CAT 320", "Operational"),
            ("Concrete Mixer CM-10", "Under Repair"),
        ] {
            Equipment::create(
                &pool,
                &CreateEquipment {
                    name: name.into(),
                    equipment_type: "Heavy Equipment".into(),
                    status: status.into(),
                    last_maintenance: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
                    next_maintenance: NaiveDate::from_ymd_opt(2023, 11, 10).unwrap(),
                    notes: None,
                },
            )
            .await
            .unwrap();
        }

        let operational = Equipment::find_all(
            &pool,
            &EquipmentFilter {
                status: Some("Operational".into()),
                equipment_type: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(operational.len(), 1);
        assert_eq!(operational[0].name, "Excavator - CAT 320");
    }
}
