use serde_json::{Map, Value};
use sqlx::SqlitePool;
use thiserror::Error;

use db::schema::{self, SchemaError, TableName};

use super::dashboard::normalize_role;

#[derive(Debug, Error)]
pub enum RoleDataError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Which tables a role's dashboard pulls from. Unknown roles get the
/// project list and nothing else.
pub fn tables_for_role(role: &str) -> Vec<TableName> {
    match normalize_role(role).as_str() {
        "project_manager" => vec![TableName::Projects, TableName::Tasks, TableName::Workers],
        "construction_worker" => vec![
            TableName::Tasks,
            TableName::Materials,
            TableName::SafetyChecklists,
        ],
        "safety_officer" => vec![
            TableName::SafetyIncidents,
            TableName::SafetyChecklists,
            TableName::Projects,
        ],
        "site_supervisor" => vec![
            TableName::Projects,
            TableName::Equipment,
            TableName::Workers,
            TableName::DailyTasks,
            TableName::ProgressEntries,
        ],
        "inventory_manager" => vec![TableName::Materials, TableName::Equipment],
        _ => vec![TableName::Projects],
    }
}

/// Fetch every table relevant to a role, keyed by table name.
pub async fn fetch_role_data(
    pool: &SqlitePool,
    role: &str,
) -> Result<Map<String, Value>, RoleDataError> {
    let mut data = Map::new();
    for table in tables_for_role(role) {
        let rows = schema::fetch_table_rows(pool, table).await?;
        data.insert(
            table.as_str().to_string(),
            Value::Array(rows.into_iter().map(Value::Object).collect()),
        );
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_have_specific_tables() {
        assert_eq!(
            tables_for_role("inventory_manager"),
            vec![TableName::Materials, TableName::Equipment]
        );
        assert_eq!(tables_for_role("Site Supervisor").len(), 5);
    }

    #[test]
    fn unknown_role_gets_projects_only() {
        assert_eq!(tables_for_role("astronaut"), vec![TableName::Projects]);
    }
}
