//! Todos API endpoint

use crate::{
    client::Client,
    error::Result,
    http::ApiRequest,
    types::{CreateTodo, Todo},
};

/// Todos API resource.
#[derive(Clone)]
pub struct Todos {
    client: Client,
}

impl Todos {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all todos.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        self.client.execute(ApiRequest::get("/todos")).await?.json()
    }

    /// List the todos belonging to a user.
    pub async fn list_for_user(&self, user_id: u64) -> Result<Vec<Todo>> {
        self.client
            .execute(ApiRequest::get(format!("/users/{}/todos", user_id)))
            .await?
            .json()
    }

    /// Create a todo under a user.
    pub async fn create_for_user(&self, user_id: u64, payload: &CreateTodo) -> Result<Todo> {
        self.client
            .execute(ApiRequest::post(format!("/users/{}/todos", user_id)).with_body(payload)?)
            .await?
            .json()
    }

    /// Create a todo from an arbitrary JSON payload.
    pub async fn create_for_user_raw(
        &self,
        user_id: u64,
        payload: serde_json::Value,
    ) -> Result<Todo> {
        self.client
            .execute(ApiRequest::post(format!("/users/{}/todos", user_id)).with_json(payload))
            .await?
            .json()
    }

    /// Delete a user's todo. The backend answers 204 with an empty body.
    pub async fn delete_for_user(&self, user_id: u64, todo_id: u64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!(
                "/users/{}/todos/{}",
                user_id, todo_id
            )))
            .await?;
        Ok(())
    }
}
