//! Housekeeping CLI for the dashboard database.
//!
//! Usage: `db_maintenance [status|clear|reseed] [--database-url <url>]`.
//! The database is taken from the flag, then `DATABASE_URL`, then the
//! server's asset-directory SQLite file.

use anyhow::{Context, Result, bail};
use db::{
    DBService,
    services::{maintenance::MaintenanceService, seed::SeedService},
};
use tracing_subscriber::EnvFilter;
use utils::assets::asset_dir;

#[derive(Debug, PartialEq)]
struct CliArgs {
    command: String,
    database_url: Option<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut command = None;
    let mut database_url = None;
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--database-url" => {
                database_url = Some(args.next().context("--database-url requires a value")?);
            }
            _ if command.is_none() => command = Some(arg),
            other => bail!("unexpected argument '{other}'"),
        }
    }
    Ok(CliArgs {
        command: command.unwrap_or_else(|| "status".to_string()),
        database_url,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| {
            format!(
                "sqlite://{}",
                asset_dir().join("db.sqlite").to_string_lossy()
            )
        });
    let db = DBService::new_with_url(&database_url)
        .await
        .context("failed to open database")?;

    match args.command.as_str() {
        "status" => {
            for count in MaintenanceService::row_counts(&db.pool).await? {
                println!("{:<20} {:>6}", count.table.to_string(), count.rows);
            }
        }
        "clear" => {
            let deleted = MaintenanceService::clear_dynamic_data(&db.pool).await?;
            println!("deleted {deleted} rows");
        }
        "reseed" => {
            let deleted = MaintenanceService::clear_dynamic_data(&db.pool).await?;
            SeedService::seed_if_empty(&db.pool).await?;
            println!("deleted {deleted} rows and reloaded sample data");
        }
        other => bail!("unknown command '{other}' (expected status, clear, or reseed)"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_defaults_to_status() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, "status");
        assert_eq!(args.database_url, None);
    }

    #[test]
    fn database_url_flag_is_accepted_in_any_position() {
        let args = parse(&["reseed", "--database-url", "sqlite://x.sqlite"]).unwrap();
        assert_eq!(args.command, "reseed");
        assert_eq!(args.database_url.as_deref(), Some("sqlite://x.sqlite"));

        let args = parse(&["--database-url", "sqlite://x.sqlite", "clear"]).unwrap();
        assert_eq!(args.command, "clear");
        assert_eq!(args.database_url.as_deref(), Some("sqlite://x.sqlite"));
    }

    #[test]
    fn database_url_flag_requires_a_value() {
        assert!(parse(&["status", "--database-url"]).is_err());
    }

    #[test]
    fn extra_positional_arguments_are_rejected() {
        assert!(parse(&["status", "extra"]).is_err());
    }
}
