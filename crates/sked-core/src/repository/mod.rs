use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTask, Task, TaskFilter};
use async_trait::async_trait;

pub mod tasks;

/// Persistence port for tasks.
///
/// The scheduler only sees this trait, so any store (or a test double) can
/// be injected in place of SQLite.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get_task(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn insert_task(&self, task: NewTask) -> Result<Task, CoreError>;
    /// Overwrites every field of the row with `task.id`.
    async fn update_task(&self, task: &Task) -> Result<(), CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Returns matching tasks ordered by date, at most `limit` of them.
    async fn list_tasks(&self, filter: &TaskFilter, limit: u32) -> Result<Vec<Task>, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
