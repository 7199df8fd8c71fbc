//! Posts API endpoint

use crate::{
    client::Client,
    error::Result,
    http::ApiRequest,
    types::{CreatePost, Post},
};

/// Posts API resource.
#[derive(Clone)]
pub struct Posts {
    client: Client,
}

impl Posts {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all posts.
    pub async fn list(&self) -> Result<Vec<Post>> {
        self.client.execute(ApiRequest::get("/posts")).await?.json()
    }

    /// List the posts belonging to a user.
    pub async fn list_for_user(&self, user_id: u64) -> Result<Vec<Post>> {
        self.client
            .execute(ApiRequest::get(format!("/users/{}/posts", user_id)))
            .await?
            .json()
    }

    /// Create a post under a user.
    pub async fn create_for_user(&self, user_id: u64, payload: &CreatePost) -> Result<Post> {
        self.client
            .execute(ApiRequest::post(format!("/users/{}/posts", user_id)).with_body(payload)?)
            .await?
            .json()
    }

    /// Create a post from an arbitrary JSON payload.
    pub async fn create_for_user_raw(
        &self,
        user_id: u64,
        payload: serde_json::Value,
    ) -> Result<Post> {
        self.client
            .execute(ApiRequest::post(format!("/users/{}/posts", user_id)).with_json(payload))
            .await?
            .json()
    }
}
