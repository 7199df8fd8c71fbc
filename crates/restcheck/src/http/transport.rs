//! Transport trait and request/response value types
//!
//! Defines the `ApiTransport` trait implemented both by the live reqwest
//! transport and by the offline simulator, so resources are written once
//! against a single call contract.

use crate::error::Result;
use async_trait::async_trait;
use http::Method;

/// An API request to be sent via a transport.
///
/// Paths are relative to the configured base URL (e.g. `/users/5/posts`).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Request path, starting with `/`
    pub path: String,

    /// Query parameters (auth transports may append their own)
    pub query: Vec<(String, String)>,

    /// JSON request body (optional)
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Create a new request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set the JSON body.
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a value into the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn with_body<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// An API response received from a transport.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body (may be empty, e.g. for 204)
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Get the response body as a string.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Generic transport for HTTP-shaped request/response exchange.
///
/// Implemented by `LiveTransport` (real backend over reqwest) and by the
/// simulator's transport; the client cannot tell them apart.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Execute a request and return the raw response.
    ///
    /// Transports return error statuses (404, 422, ...) as `Ok` responses;
    /// only transport-level faults (connection, timeout, missing simulated
    /// route) are `Err`.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;

    /// Transport name for logging.
    fn transport_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::post("/users")
            .with_json(serde_json::json!({"name": "x"}))
            .with_query("access_token", "t");

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/users");
        assert_eq!(request.query.len(), 1);
        assert!(request.body.is_some());
    }

    #[test]
    fn test_response_is_success() {
        assert!(ApiResponse::new(204, Vec::new()).is_success());
        assert!(!ApiResponse::new(404, Vec::new()).is_success());
    }

    #[test]
    fn test_response_json() {
        let response = ApiResponse::new(200, br#"{"id": 5}"#.to_vec());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 5);
    }
}
