use crate::domain::{NewTodo, TodoChanges, DEFAULT_STATUS};
use serde::{Deserialize, Serialize};

// a field only counts as supplied when it carries a non-empty value
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[derive(Deserialize, Debug, Default)]
pub struct CreateTodoRequest {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl CreateTodoRequest {
    /// `None` when no name was supplied. A missing status becomes `"to-do"`.
    pub fn into_new_todo(self) -> Option<NewTodo> {
        let name = present(self.name)?;
        let status = present(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string());
        Some(NewTodo { name, status })
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateTodoRequest {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl UpdateTodoRequest {
    /// `None` when neither field was supplied.
    pub fn into_changes(self) -> Option<TodoChanges> {
        let changes = TodoChanges {
            name: present(self.name),
            status: present(self.status),
        };

        if changes.is_empty() {
            None
        } else {
            Some(changes)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}
