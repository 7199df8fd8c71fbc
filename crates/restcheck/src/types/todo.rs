//! Todo resource models

use serde::{Deserialize, Serialize};

use super::fakers;

/// A todo as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Entity id
    pub id: u64,
    /// Owning user id
    pub user_id: u64,
    /// Todo title
    pub title: String,
    /// Due date, RFC 3339
    pub due_on: String,
    /// "pending" or "completed"
    pub status: String,
}

/// Payload for creating a todo under a user. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Todo title
    pub title: String,
    /// Due date, RFC 3339
    pub due_on: String,
    /// "pending" or "completed"
    pub status: String,
}

impl CreateTodo {
    /// Generate a valid random payload.
    pub fn random() -> Self {
        Self {
            title: fakers::random_string(),
            due_on: fakers::random_due_date(),
            status: fakers::random_todo_status().to_string(),
        }
    }
}
