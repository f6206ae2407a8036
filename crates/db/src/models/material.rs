use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Material not found")]
    NotFound,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Material {
    pub material_id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit: String,
    pub cost_per_unit: f64,
    pub supplier: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMaterial {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit: String,
    pub cost_per_unit: f64,
    pub supplier: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMaterial {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub cost_per_unit: Option<f64>,
    pub supplier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MaterialFilter {
    pub category: Option<String>,
    pub supplier: Option<String>,
}

const COLUMNS: &str = "material_id, name, category, quantity, unit, cost_per_unit, supplier";

impl Material {
    pub async fn find_all(
        pool: &SqlitePool,
        filter: &MaterialFilter,
    ) -> Result<Vec<Material>, MaterialError> {
        let mut sql = format!("SELECT {COLUMNS} FROM materials");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.category.is_some() {
            clauses.push("category = ?");
        }
        if filter.supplier.is_some() {
            clauses.push("supplier = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY category, name");

        let mut query = sqlx::query_as::<_, Material>(&sql);
        if let Some(category) = &filter.category {
            query = query.bind(category);
        }
        if let Some(supplier) = &filter.supplier {
            query = query.bind(supplier);
        }

        Ok(query.fetch_all(pool).await?)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Material>, MaterialError> {
        let material = sqlx::query_as::<_, Material>(&format!(
            "SELECT {COLUMNS} FROM materials WHERE material_id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(material)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateMaterial,
    ) -> Result<Material, MaterialError> {
        let material = sqlx::query_as::<_, Material>(&format!(
            r#"INSERT INTO materials (name, category, quantity, unit, cost_per_unit, supplier)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(data.cost_per_unit)
        .bind(&data.supplier)
        .fetch_one(pool)
        .await?;
        Ok(material)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateMaterial,
    ) -> Result<Material, MaterialError> {
        let material = sqlx::query_as::<_, Material>(&format!(
            r#"UPDATE materials SET
                 name          = COALESCE(?, name),
                 category      = COALESCE(?, category),
                 quantity      = COALESCE(?, quantity),
                 unit          = COALESCE(?, unit),
                 cost_per_unit = COALESCE(?, cost_per_unit),
                 supplier      = COALESCE(?, supplier)
               WHERE material_id = ?
               RETURNING {COLUMNS}"#
        ))
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(data.cost_per_unit)
        .bind(&data.supplier)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(MaterialError::NotFound)?;
        Ok(material)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, MaterialError> {
        let result = sqlx::query("DELETE FROM materials WHERE material_id = ?")
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
    async fn quantity_update_roundtrip() {
        let pool = setup_test_pool().await;
        let created = Material::create(
            &pool,
            &CreateMaterial {
                name: "Concrete Mix".into(),
                category: "Building Materials".into(),
                quantity: 1500,
                unit: "Bags".into(),
                cost_per_unit: 12.5,
                supplier: "ABC Suppliers".into(),
            },
        )
        .await
        .unwrap();

        let updated = Material::update(
            &pool,
            created.material_id,
            &UpdateMaterial {
                quantity: Some(1400),
                name: None,
                category: None,
                unit: None,
                cost_per_unit: None,
                supplier: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.quantity, 1400);
        assert_eq!(updated.supplier, "ABC Suppliers");
    }
}
