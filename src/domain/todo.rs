use chrono::NaiveDateTime;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// Status given to a todo created without one.
pub const DEFAULT_STATUS: &str = "to-do";

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Display)]
#[display("#{} {} ({})", id, name, status)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// the row as re-read after an update (no created_at)
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdatedTodo {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub status: String,
}

/// Fields to overwrite on an existing todo. `None` leaves the column alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl TodoChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }
}
