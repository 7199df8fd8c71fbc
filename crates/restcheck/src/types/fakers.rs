//! Random test data generators
//!
//! Mirrors the value shapes the backend accepts so generated payloads always
//! pass server-side validation in positive tests.

use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;

/// Random positive id in a range the backend treats as plausible.
pub fn random_number() -> u64 {
    rand::rng().random_range(100..=1000)
}

/// Random alphanumeric string, 9 to 15 characters.
pub fn random_string() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    let len = rng.random_range(9..=15);
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Random email address.
pub fn random_email() -> String {
    format!("{}@example.com", random_string().to_lowercase())
}

/// Random user gender accepted by the backend.
pub fn random_gender() -> &'static str {
    if rand::rng().random_range(0..2) == 0 {
        "male"
    } else {
        "female"
    }
}

/// Random user status accepted by the backend.
pub fn random_status() -> &'static str {
    if rand::rng().random_range(0..2) == 0 {
        "active"
    } else {
        "inactive"
    }
}

/// Random todo status accepted by the backend.
pub fn random_todo_status() -> &'static str {
    if rand::rng().random_range(0..2) == 0 {
        "pending"
    } else {
        "completed"
    }
}

/// Random RFC 3339 due date a few days in the future.
pub fn random_due_date() -> String {
    let days = rand::rng().random_range(1..=30);
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}
