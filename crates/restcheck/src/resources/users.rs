//! Users API endpoint

use crate::{
    client::Client,
    error::Result,
    http::ApiRequest,
    types::{CreateUser, UpdateUser, User},
};

/// Users API resource.
#[derive(Clone)]
pub struct Users {
    client: Client,
}

impl Users {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.execute(ApiRequest::get("/users")).await?.json()
    }

    /// Get a single user by id.
    pub async fn get(&self, user_id: u64) -> Result<User> {
        self.client
            .execute(ApiRequest::get(format!("/users/{}", user_id)))
            .await?
            .json()
    }

    /// Get a single user by a raw id segment.
    ///
    /// Negative tests use this to submit non-numeric or hostile ids that a
    /// `u64` parameter could never express.
    pub async fn get_raw(&self, user_id: &str) -> Result<User> {
        self.client
            .execute(ApiRequest::get(format!("/users/{}", user_id)))
            .await?
            .json()
    }

    /// Create a user.
    pub async fn create(&self, payload: &CreateUser) -> Result<User> {
        self.client
            .execute(ApiRequest::post("/users").with_body(payload)?)
            .await?
            .json()
    }

    /// Create a user from an arbitrary JSON payload.
    pub async fn create_raw(&self, payload: serde_json::Value) -> Result<User> {
        self.client
            .execute(ApiRequest::post("/users").with_json(payload))
            .await?
            .json()
    }

    /// Partially update a user.
    pub async fn update(&self, user_id: u64, payload: &UpdateUser) -> Result<User> {
        self.client
            .execute(ApiRequest::patch(format!("/users/{}", user_id)).with_body(payload)?)
            .await?
            .json()
    }

    /// Partially update a user from an arbitrary JSON payload.
    pub async fn update_raw(&self, user_id: u64, payload: serde_json::Value) -> Result<User> {
        self.client
            .execute(ApiRequest::patch(format!("/users/{}", user_id)).with_json(payload))
            .await?
            .json()
    }

    /// Delete a user. The backend answers 204 with an empty body.
    pub async fn delete(&self, user_id: u64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/users/{}", user_id)))
            .await?;
        Ok(())
    }
}
