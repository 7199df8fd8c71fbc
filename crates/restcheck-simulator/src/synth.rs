//! Response synthesizer
//!
//! Builds the canonical success and error payloads for each resource type.
//! The simulator has no backing store, so entity fields beyond the echoed id
//! are fixed stand-ins matching what the suite's schema checks expect.

use serde_json::{json, Map, Value};

use crate::rules::ValidationOutcome;

/// Reserved id that is always "not found", independent of deletion state.
pub const SENTINEL_NOT_FOUND_ID: u64 = 999_999;

/// Fixed id assigned to every simulated create.
pub const SYNTHETIC_CREATED_ID: u64 = 12_345;

/// An HTTP-shaped response produced by the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body; `None` for empty-bodied statuses like 204
    pub body: Option<Value>,
}

impl SyntheticResponse {
    /// 200 with a JSON body.
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    /// 201 with a JSON body.
    pub fn created(body: Value) -> Self {
        Self {
            status: 201,
            body: Some(body),
        }
    }

    /// 204 with an empty body.
    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// The canonical 404 payload.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: Some(json!({"message": "Resource not found"})),
        }
    }

    /// The canonical 422 payload: a one-element list of field/message pairs.
    pub fn unprocessable(field: &str, message: &str) -> Self {
        Self {
            status: 422,
            body: Some(json!([{"field": field, "message": message}])),
        }
    }

    /// Build a response from a validation outcome, mapping `Accepted` fields
    /// through `on_accept`.
    pub fn from_validation(
        outcome: ValidationOutcome,
        on_accept: impl FnOnce(Map<String, Value>) -> Self,
    ) -> Self {
        match outcome {
            ValidationOutcome::Accepted(fields) => on_accept(fields),
            ValidationOutcome::Rejected { field, message } => Self::unprocessable(field, message),
        }
    }
}

/// Is this raw path segment a valid, findable user id?
///
/// Valid means: round-trips to a positive integer and is not the reserved
/// sentinel. Everything else (non-numeric, zero, negative, sentinel) is
/// treated as not found.
pub fn is_valid_id(id: &str) -> bool {
    match id.parse::<i64>() {
        Ok(n) => n > 0 && n != SENTINEL_NOT_FOUND_ID as i64,
        Err(_) => false,
    }
}

/// Canonical user entity echoing the requested id.
pub fn canonical_user(id: u64) -> Value {
    json!({
        "id": id,
        "name": "Test User",
        "email": "test@example.com",
        "gender": "male",
        "status": "active"
    })
}

/// Fixed 2-element user list for `GET /users`.
pub fn canonical_users_list() -> Value {
    json!([
        {"id": 1, "name": "Test User", "email": "test@example.com", "gender": "male", "status": "active"},
        {"id": 2, "name": "Jane Doe", "email": "jane@example.com", "gender": "female", "status": "active"}
    ])
}

fn canonical_post() -> Value {
    json!({"id": 1, "user_id": 1, "title": "Test Post", "body": "Test body content"})
}

/// Fixed 2-element post list for `GET /posts`.
pub fn canonical_posts_list() -> Value {
    json!([
        {"id": 1, "user_id": 1, "title": "Test Post", "body": "Test body content"},
        {"id": 2, "user_id": 1, "title": "Another Post", "body": "More content"}
    ])
}

/// Fixed one-element list for `GET /users/{id}/posts`.
///
/// The same list is returned regardless of which id was requested; the
/// simulator keeps no per-id correlation for list endpoints.
pub fn canonical_user_posts() -> Value {
    json!([canonical_post()])
}

fn canonical_todo() -> Value {
    json!({
        "id": 1,
        "user_id": 1,
        "title": "Test Todo",
        "due_on": "2024-12-31T23:59:59.000+05:30",
        "status": "pending"
    })
}

/// Fixed one-element todo list for `GET /todos`.
pub fn canonical_todos_list() -> Value {
    json!([canonical_todo()])
}

/// Fixed one-element list for `GET /users/{id}/todos`; same simplification
/// as [`canonical_user_posts`].
pub fn canonical_user_todos() -> Value {
    json!([canonical_todo()])
}

/// 201 body for a user create: synthetic id merged with accepted fields.
pub fn created_user(fields: &Map<String, Value>) -> Value {
    json!({
        "id": SYNTHETIC_CREATED_ID,
        "name": fields.get("name"),
        "email": fields.get("email"),
        "gender": fields.get("gender"),
        "status": fields.get("status")
    })
}

/// 200 body for a user update: echoed id, submitted fields merged over
/// canonical defaults.
pub fn updated_user(id: u64, fields: &Map<String, Value>) -> Value {
    json!({
        "id": id,
        "name": fields.get("name").cloned().unwrap_or_else(|| json!("Updated User")),
        "email": fields.get("email").cloned().unwrap_or_else(|| json!("updated@example.com")),
        "gender": fields.get("gender").cloned().unwrap_or_else(|| json!("male")),
        "status": fields.get("status").cloned().unwrap_or_else(|| json!("active"))
    })
}

/// 201 body for a post create.
pub fn created_post(fields: &Map<String, Value>) -> Value {
    json!({
        "id": SYNTHETIC_CREATED_ID,
        "user_id": 1,
        "title": fields.get("title"),
        "body": fields.get("body")
    })
}

/// 201 body for a todo create.
pub fn created_todo(fields: &Map<String, Value>) -> Value {
    json!({
        "id": SYNTHETIC_CREATED_ID,
        "user_id": 1,
        "title": fields.get("title"),
        "due_on": fields.get("due_on"),
        "status": fields.get("status")
    })
}
