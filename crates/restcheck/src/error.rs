//! Error types for the restcheck SDK
//!
//! NotFound and validation failures are expected, deterministic outcomes the
//! conformance suite asserts on directly; only transport faults and gaps in
//! simulation coverage are "real" failures.

use thiserror::Error;

/// Result type alias for operations that can fail with a restcheck error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the restcheck SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication failed or token missing (401).
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found (404): invalid, reserved, or deleted identifier.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unprocessable entity (422): missing, malformed, or oversize fields.
    #[error("Validation failed: {}", format_field_errors(.errors))]
    UnprocessableEntity {
        /// Per-field validation errors from the API
        errors: Vec<FieldError>,
    },

    /// Generic API error for status codes not covered above.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Simulation coverage gap: a request reached the simulated transport
    /// that no route handles. Always fatal to the test run.
    #[error("Simulation error: {0}")]
    Simulation(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A single validation failure, as the API reports it:
/// `{"field": "name", "message": "can't be blank"}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,
    /// Validation error message
    pub message: String,
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, serde::Deserialize)]
struct MessageBody {
    message: String,
}

impl Error {
    /// Create an API error from an HTTP response status and body.
    ///
    /// The backend uses two error body shapes: `{"message": ...}` for 401
    /// and 404, and a list of `{"field", "message"}` objects for 422.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        match status {
            401 => {
                let message = serde_json::from_slice::<MessageBody>(body)
                    .map(|b| b.message)
                    .unwrap_or_else(|_| text.into_owned());
                Error::Unauthorized(message)
            }
            404 => {
                let message = serde_json::from_slice::<MessageBody>(body)
                    .map(|b| b.message)
                    .unwrap_or_else(|_| text.into_owned());
                Error::NotFound(message)
            }
            422 => {
                let errors = serde_json::from_slice::<Vec<FieldError>>(body).unwrap_or_default();
                Error::UnprocessableEntity { errors }
            }
            _ => Error::ApiError {
                status,
                message: text.into_owned(),
            },
        }
    }

    /// Check whether this is a 404 outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check whether this is a 422 validation outcome.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::UnprocessableEntity { .. })
    }

    /// Per-field validation errors, if this is a validation outcome.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Error::UnprocessableEntity { errors } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_404_parsing() {
        let body = br#"{"message": "Resource not found"}"#;
        let error = Error::from_response(404, body);
        match error {
            Error::NotFound(msg) => assert_eq!(msg, "Resource not found"),
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_error_422_field_errors() {
        let body = br#"[{"field": "email", "message": "is invalid"}]"#;
        let error = Error::from_response(422, body);
        assert!(error.is_validation());
        let errors = error.field_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "is invalid");
    }

    #[test]
    fn test_error_401_parsing() {
        let body = br#"{"message": "Authentication failed"}"#;
        let error = Error::from_response(401, body);
        match error {
            Error::Unauthorized(msg) => assert_eq!(msg, "Authentication failed"),
            _ => panic!("Expected Unauthorized variant"),
        }
    }

    #[test]
    fn test_error_plain_text_fallback() {
        let error = Error::from_response(404, b"gone");
        match error {
            Error::NotFound(msg) => assert_eq!(msg, "gone"),
            _ => panic!("Expected NotFound variant"),
        }
    }

    #[test]
    fn test_error_unknown_status() {
        let error = Error::from_response(500, b"boom");
        match error {
            Error::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected ApiError variant"),
        }
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::NotFound("x".to_string()).is_not_found());
        assert!(!Error::Unauthorized("x".to_string()).is_not_found());
    }
}
