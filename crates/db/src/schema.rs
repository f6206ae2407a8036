use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef, sqlite::SqliteRow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// Allow-list of queryable tables. Generic table access goes through this
/// enum so request text is never interpolated into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableName {
    Projects,
    Tasks,
    Workers,
    Materials,
    SafetyIncidents,
    Equipment,
    SafetyChecklists,
    DailyTasks,
    ProgressEntries,
}

impl TableName {
    pub const ALL: [TableName; 9] = [
        TableName::Projects,
        TableName::Tasks,
        TableName::Workers,
        TableName::Materials,
        TableName::SafetyIncidents,
        TableName::Equipment,
        TableName::SafetyChecklists,
        TableName::DailyTasks,
        TableName::ProgressEntries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Projects => "projects",
            TableName::Tasks => "tasks",
            TableName::Workers => "workers",
            TableName::Materials => "materials",
            TableName::SafetyIncidents => "safety_incidents",
            TableName::Equipment => "equipment",
            TableName::SafetyChecklists => "safety_checklists",
            TableName::DailyTasks => "daily_tasks",
            TableName::ProgressEntries => "progress_entries",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownTable(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

/// `SELECT *` over an allow-listed table, each row as a JSON object with
/// columns in table order.
pub async fn fetch_table_rows(
    pool: &SqlitePool,
    table: TableName,
) -> Result<Vec<Map<String, Value>>, SchemaError> {
    let sql = format!("SELECT * FROM {}", table.as_str());
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    rows.iter().map(row_to_json).collect()
}

fn row_to_json(row: &SqliteRow) -> Result<Map<String, Value>, SchemaError> {
    let mut object = Map::new();
    for column in row.columns() {
        let ordinal = column.ordinal();
        let raw = row.try_get_raw(ordinal)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(ordinal)?),
                "REAL" => Value::from(row.try_get::<f64, _>(ordinal)?),
                "BOOLEAN" => Value::from(row.try_get::<bool, _>(ordinal)?),
                _ => Value::from(row.try_get::<String, _>(ordinal)?),
            }
        };
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

/// Names of the user tables actually present in the database.
pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>, SchemaError> {
    let rows = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations'
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn table_columns(
    pool: &SqlitePool,
    table: TableName,
) -> Result<Vec<ColumnInfo>, SchemaError> {
    #[derive(sqlx::FromRow)]
    struct PragmaRow {
        name: String,
        #[sqlx(rename = "type")]
        data_type: String,
        notnull: i64,
        pk: i64,
    }

    let rows = sqlx::query_as::<_, PragmaRow>(
        "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?) ORDER BY cid",
    )
    .bind(table.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| ColumnInfo {
            name: r.name,
            data_type: r.data_type,
            not_null: r.notnull != 0,
            primary_key: r.pk != 0,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_utils::{sample_project, setup_test_pool};

    #[test]
    fn unknown_table_is_rejected() {
        let err = "users; DROP TABLE projects".parse::<TableName>().unwrap_err();
        assert!(matches!(err, SchemaError::UnknownTable(_)));
    }

    #[test]
    fn every_table_roundtrips_through_from_str() {
        for table in TableName::ALL {
            assert_eq!(table.as_str().parse::<TableName>().unwrap(), table);
        }
    }

    #[tokio::test]
    async fn rows_keep_column_order() {
        let pool = setup_test_pool().await;
        sample_project(&pool).await;

        let rows = fetch_table_rows(&pool, TableName::Projects).await.unwrap();
        assert_eq!(rows.len(), 1);
        let keys: Vec<_> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "project_id",
                "name",
                "location",
                "start_date",
                "end_date",
                "budget",
                "status",
                "client",
                "description"
            ]
        );
        assert_eq!(rows[0]["project_id"], 1);
        assert_eq!(rows[0]["description"], Value::Null);
    }

    #[tokio::test]
    async fn introspection_sees_all_tables() {
        let pool = setup_test_pool().await;
        let tables = list_tables(&pool).await.unwrap();
        for table in TableName::ALL {
            assert!(tables.iter().any(|t| t == table.as_str()), "{table} missing");
        }

        let columns = table_columns(&pool, TableName::Equipment).await.unwrap();
        let pk: Vec<_> = columns.iter().filter(|c| c.primary_key).collect();
        assert_eq!(pk.len(), 1);
        assert_eq!(pk[0].name, "equipment_id");
    }
}
