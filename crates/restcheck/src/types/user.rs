//! User resource models

use serde::{Deserialize, Serialize};

use super::fakers;

/// A user as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Entity id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// "male" or "female"
    pub gender: String,
    /// "active" or "inactive"
    pub status: String,
}

/// Payload for creating a user. All four fields are required by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Email address (must contain `@`)
    pub email: String,
    /// "male" or "female"
    pub gender: String,
    /// "active" or "inactive"
    pub status: String,
}

impl CreateUser {
    /// Generate a valid random payload.
    pub fn random() -> Self {
        Self {
            name: fakers::random_string(),
            email: fakers::random_email(),
            gender: fakers::random_gender().to_string(),
            status: fakers::random_status().to_string(),
        }
    }
}

/// Partial payload for PATCH updates; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateUser {
    /// Generate a random full update.
    pub fn random() -> Self {
        Self {
            name: Some(fakers::random_string()),
            email: Some(fakers::random_email()),
            gender: Some(fakers::random_gender().to_string()),
            status: Some(fakers::random_status().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trip() {
        let json = r#"{"id": 1, "name": "Test User", "email": "test@example.com", "gender": "male", "status": "active"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_update_user_skips_absent_fields() {
        let update = UpdateUser {
            name: Some("x".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"name": "x"}));
    }

    #[test]
    fn test_random_create_user_is_valid_shape() {
        let payload = CreateUser::random();
        assert!(!payload.name.is_empty());
        assert!(payload.email.contains('@'));
    }
}
