use crate::date::format_date;
use crate::error::CoreError;
use crate::models::{NewTask, Task, TaskFilter};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use sqlx::QueryBuilder;
use tracing::info;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn get_task(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task, CoreError> {
        let inserted: Task = sqlx::query_as(
            r#"INSERT INTO scheduler (date, title, comment, "repeat")
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .fetch_one(self.pool())
        .await?;

        info!(id = inserted.id, date = %inserted.date, "task inserted");
        Ok(inserted)
    }

    async fn update_task(&self, task: &Task) -> Result<(), CoreError> {
        let result = sqlx::query(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, "repeat" = $4
            WHERE id = $5
            "#,
        )
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .bind(task.id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(task.id.to_string()));
        }
        info!(id = task.id, date = %task.date, "task updated");
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        info!(id, "task deleted");
        Ok(())
    }

    async fn list_tasks(&self, filter: &TaskFilter, limit: u32) -> Result<Vec<Task>, CoreError> {
        let mut query_builder: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new("SELECT * FROM scheduler");

        match filter {
            TaskFilter::All => {}
            TaskFilter::Date(date) => {
                query_builder.push(" WHERE date = ");
                query_builder.push_bind(format_date(*date));
            }
            TaskFilter::Text(term) => {
                let pattern = like_pattern(term);
                query_builder.push(r" WHERE title LIKE ");
                query_builder.push_bind(pattern.clone());
                query_builder.push(r" ESCAPE '\' OR comment LIKE ");
                query_builder.push_bind(pattern);
                query_builder.push(r" ESCAPE '\'");
            }
        }

        query_builder.push(" ORDER BY date, id LIMIT ");
        query_builder.push_bind(i64::from(limit));

        let tasks = query_builder.build_query_as().fetch_all(self.pool()).await?;
        Ok(tasks)
    }
}

/// Wraps a search term for `LIKE`, escaping its own wildcards.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
