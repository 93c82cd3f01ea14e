use crate::config::TodoConfig;
use crate::database::TodoRepository;
use crate::domain::{NewTodo, Todo, TodoChanges, UpdatedTodo};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool, QueryBuilder};

/// Builds the pool without opening a connection. Callers that need to know
/// the database is reachable should `ping` the repository.
pub fn create_pool(config: &TodoConfig) -> Pool<MySql> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

// UPDATE touching only the supplied columns, updated_at is always refreshed
pub fn build_update_statement(id: i64, changes: &TodoChanges) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new("UPDATE todo SET ");

    let mut fields = builder.separated(", ");
    if let Some(name) = &changes.name {
        fields.push("name = ");
        fields.push_bind_unseparated(name.clone());
    }
    if let Some(status) = &changes.status {
        fields.push("status = ");
        fields.push_bind_unseparated(status.clone());
    }
    fields.push("updated_at = NOW(6)");

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder
}

pub struct MySqlTodoRepository {
    pool: Pool<MySql>,
}

impl MySqlTodoRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for MySqlTodoRepository {
    async fn ping(&self) -> Result<()> {
        // the connection goes back to the pool when dropped
        let _connection = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire a database connection")?;
        Ok(())
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>("SELECT * FROM todo ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .context("Failed to load todos")?;

        Ok(todos)
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        // insert and read back in one transaction so the timestamps we return
        // are the ones the database stored
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start transaction")?;

        let result = sqlx::query(
            r#"
            INSERT INTO todo (name, status, created_at, updated_at)
            VALUES (?, ?, NOW(6), NOW(6))
            "#,
        )
        .bind(&todo.name)
        .bind(&todo.status)
        .execute(&mut *tx)
        .await
        .context(format!("Failed to insert todo {}", todo.name))?;

        let id = i64::try_from(result.last_insert_id()).context("Inserted id does not fit in i64")?;

        let created = sqlx::query_as::<_, Todo>(
            "SELECT id, name, status, created_at, updated_at FROM todo WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .context(format!("Failed to read back todo {}", id))?;

        tx.commit().await.context("Failed to commit transaction")?;

        Ok(created)
    }

    async fn update_todo(&self, id: i64, changes: &TodoChanges) -> Result<bool> {
        let result = build_update_statement(id, changes)
            .build()
            .execute(&self.pool)
            .await
            .context(format!("Failed to update todo {}", id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_updated_todo(&self, id: i64) -> Result<Option<UpdatedTodo>> {
        let todo = sqlx::query_as::<_, UpdatedTodo>(
            "SELECT id, name, status, updated_at FROM todo WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(format!("Failed to read todo {}", id))?;

        Ok(todo)
    }

    async fn delete_todo(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to delete todo {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}
