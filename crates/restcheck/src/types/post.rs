//! Post resource models

use serde::{Deserialize, Serialize};

use super::fakers;

/// A post as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Entity id
    pub id: u64,
    /// Owning user id
    pub user_id: u64,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
}

/// Payload for creating a post under a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
}

impl CreatePost {
    /// Generate a valid random payload.
    pub fn random() -> Self {
        Self {
            title: fakers::random_string(),
            body: fakers::random_string(),
        }
    }
}
