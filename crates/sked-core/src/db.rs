use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

use crate::error::CoreError;

pub use sqlx::SqlitePool as DbPool;

/// Opens (creating if needed) the SQLite file at `db_path` and brings the
/// `scheduler` table up to date with the embedded migrations.
///
/// Missing parent directories are created as well.
pub async fn establish_connection(db_path: &str) -> Result<SqlitePool, CoreError> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    if !Path::new(db_path).exists() {
        info!(db_path, "creating database file");
        tokio::fs::File::create(db_path).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_path)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!(db_path, "database ready");

    Ok(pool)
}
