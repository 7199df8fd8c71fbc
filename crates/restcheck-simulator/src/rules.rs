//! Per-resource validation rules
//!
//! Declares the required fields and size limits each simulated write is
//! checked against. Rejections carry the exact field/message strings the
//! real backend emits, because the conformance suite asserts on them.
//!
//! The create/update asymmetry is intentional: create bounds name and email,
//! update bounds name only. That is the observed backend behavior the suite
//! is pinned to; do not unify.

use serde_json::{Map, Value};

/// Maximum accepted length for name and email on create, name on update.
pub const MAX_FIELD_LEN: usize = 1000;

/// Outcome of validating a simulated write.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Input passed; carries the normalized (pass-through) fields.
    Accepted(Map<String, Value>),
    /// Input rejected with a deterministic field and message (status 422).
    Rejected {
        /// Field the backend blames
        field: &'static str,
        /// Backend message text
        message: &'static str,
    },
}

impl ValidationOutcome {
    fn rejected(field: &'static str, message: &'static str) -> Self {
        Self::Rejected { field, message }
    }
}

/// A field is blank when it is absent, null, or an empty string.
fn is_blank(body: &Map<String, Value>, key: &str) -> bool {
    match body.get(key) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Length of a field's textual form; absent fields count as zero.
fn field_len(body: &Map<String, Value>, key: &str) -> usize {
    match body.get(key) {
        None | Some(Value::Null) => 0,
        Some(Value::String(s)) => s.chars().count(),
        Some(other) => other.to_string().chars().count(),
    }
}

fn field_contains(body: &Map<String, Value>, key: &str, needle: char) -> bool {
    match body.get(key) {
        Some(Value::String(s)) => s.contains(needle),
        Some(other) => other.to_string().contains(needle),
        None => false,
    }
}

/// Validate a user create payload: all four fields required, email must
/// contain `@`, name and email bounded to [`MAX_FIELD_LEN`].
pub fn validate_create_user(body: &Map<String, Value>) -> ValidationOutcome {
    if is_blank(body, "name")
        || is_blank(body, "email")
        || is_blank(body, "gender")
        || is_blank(body, "status")
    {
        return ValidationOutcome::rejected("name", "can't be blank");
    }

    if !field_contains(body, "email", '@') {
        return ValidationOutcome::rejected("email", "is invalid");
    }

    if field_len(body, "name") > MAX_FIELD_LEN || field_len(body, "email") > MAX_FIELD_LEN {
        return ValidationOutcome::rejected("name", "is too long");
    }

    ValidationOutcome::Accepted(body.clone())
}

/// Validate a user update payload: partial updates are allowed, only the
/// name size limit applies.
pub fn validate_update_user(body: &Map<String, Value>) -> ValidationOutcome {
    if field_len(body, "name") > MAX_FIELD_LEN {
        return ValidationOutcome::rejected("name", "is too long");
    }

    ValidationOutcome::Accepted(body.clone())
}

/// Validate a post create payload: title and body required.
pub fn validate_create_post(body: &Map<String, Value>) -> ValidationOutcome {
    if is_blank(body, "title") || is_blank(body, "body") {
        return ValidationOutcome::rejected("title", "can't be blank");
    }

    ValidationOutcome::Accepted(body.clone())
}

/// Validate a todo create payload: title, due date, and status required.
pub fn validate_create_todo(body: &Map<String, Value>) -> ValidationOutcome {
    if is_blank(body, "title") || is_blank(body, "due_on") || is_blank(body, "status") {
        return ValidationOutcome::rejected("title", "can't be blank");
    }

    ValidationOutcome::Accepted(body.clone())
}
