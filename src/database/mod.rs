use crate::domain::{NewTodo, Todo, TodoChanges, UpdatedTodo};
use anyhow::Result;
use async_trait::async_trait;

pub mod mysql;

// a TodoRepository is shared between request handlers behind an Arc
// sqlx::Pool is thread safe, so implementations only need to hold a pool handle
// generic todo operations live here, db specific implementations in "mysql.rs"
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Checks out a connection and hands it straight back.
    async fn ping(&self) -> Result<()>;

    async fn list_todos(&self) -> Result<Vec<Todo>>;
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo>;

    /// Returns `false` when no row has the given id.
    async fn update_todo(&self, id: i64, changes: &TodoChanges) -> Result<bool>;
    async fn get_updated_todo(&self, id: i64) -> Result<Option<UpdatedTodo>>;

    /// Returns `false` when no row has the given id.
    async fn delete_todo(&self, id: i64) -> Result<bool>;
}
