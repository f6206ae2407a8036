use std::{env, path::PathBuf};

use directories::ProjectDirs;

const ASSET_DIR_ENV: &str = "SITEDASH_ASSET_DIR";

/// Directory holding the SQLite database and any other runtime files.
///
/// Resolution order: `SITEDASH_ASSET_DIR` env var, then the platform data
/// directory, then `./assets` as a last resort.
pub fn asset_dir() -> PathBuf {
    if let Ok(dir) = env::var(ASSET_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(dirs) = ProjectDirs::from("dev", "sitedash", "sitedash") {
        return dirs.data_dir().to_path_buf();
    }

    tracing::warn!("could not resolve a platform data directory, falling back to ./assets");
    PathBuf::from("assets")
}
